//! Age-tiered pricing for the Jantar Genesis registration

/// Payment link for the 6-12 tier
pub const CHILD_PAYMENT_LINK: &str = "https://mpago.la/2X8C8Xg";

/// Payment link for everyone older than 12
pub const ADULT_PAYMENT_LINK: &str = "https://mpago.la/1tpEzgf";

pub const CHILD_PRICE: u32 = 30;
pub const ADULT_PRICE: u32 = 60;

/// Highest age the registration form accepts
pub const MAX_AGE: u32 = 120;

/// Price band an age falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceTier {
    /// Up to 5 years old
    Free,
    /// 6 to 12 years old
    Child,
    /// 13 and older
    Adult,
}

impl PriceTier {
    pub fn for_age(age: u32) -> Self {
        match age {
            0..=5 => Self::Free,
            6..=12 => Self::Child,
            _ => Self::Adult,
        }
    }
}

/// Price, link and labels derived from an age
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DerivedPricing {
    pub tier: PriceTier,
    pub price: u32,
    pub payment_link: Option<&'static str>,
}

impl DerivedPricing {
    /// Short price label ("Gratuito" or "R$ 60,00")
    pub fn price_label(&self) -> String {
        match self.tier {
            PriceTier::Free => "Gratuito".to_string(),
            _ => format_brl(self.price),
        }
    }

    /// Full tier text used in the preview and on the success view
    pub fn description(&self) -> String {
        match self.tier {
            PriceTier::Free => "Gratuito para crianças até 5 anos".to_string(),
            PriceTier::Child => format!("{} - Crianças de 6 a 12 anos", format_brl(self.price)),
            PriceTier::Adult => format!("{} - Valor normal", format_brl(self.price)),
        }
    }

    pub fn is_free(&self) -> bool {
        self.price == 0
    }
}

/// Derive the event price for an age
pub fn price_for_age(age: u32) -> DerivedPricing {
    let tier = PriceTier::for_age(age);
    match tier {
        PriceTier::Free => DerivedPricing {
            tier,
            price: 0,
            payment_link: None,
        },
        PriceTier::Child => DerivedPricing {
            tier,
            price: CHILD_PRICE,
            payment_link: Some(CHILD_PAYMENT_LINK),
        },
        PriceTier::Adult => DerivedPricing {
            tier,
            price: ADULT_PRICE,
            payment_link: Some(ADULT_PAYMENT_LINK),
        },
    }
}

/// Format a whole-real amount as "R$ 30,00"
pub fn format_brl(amount: u32) -> String {
    format!("R$ {amount},00")
}
