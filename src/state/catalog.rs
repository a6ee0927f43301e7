//! Static reference data for the merchandise and sign-up forms

use super::pricing::format_brl;

/// Shirt size offered in the merchandise form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    pub id: u32,
    pub name: &'static str,
}

/// Shirt print (design) offered in the merchandise form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Print {
    pub id: u32,
    pub name: &'static str,
    pub description: &'static str,
    pub image: &'static str,
}

pub const SIZES: &[Size] = &[
    Size { id: 17, name: "P" },
    Size { id: 18, name: "M" },
    Size { id: 19, name: "G" },
    Size { id: 20, name: "GG" },
];

pub const PRINTS: &[Print] = &[
    Print {
        id: 21,
        name: "Ano de Frutificar",
        description: "Lume 2026",
        image: "/images/camisas/camisa frutificar.webp",
    },
    Print {
        id: 22,
        name: "O fruto confirma a fé",
        description: "Lume 2026",
        image: "/images/camisas/camisa confirma fe.webp",
    },
    Print {
        id: 23,
        name: "Uma vida que frutifica",
        description: "Lume 2026",
        image: "/images/camisas/camisa vida.webp",
    },
];

/// Every shirt costs the same regardless of size and print
pub const MERCHANDISE_PRICE: u32 = 60;

pub const MERCHANDISE_PAYMENT_LINK: &str = "https://mpago.la/1nv11MQ";

/// Church profile linked from the landing page
pub const INSTAGRAM_URL: &str = "https://www.instagram.com/batistalume/";

/// Brazilian federative units offered in the sign-up address
pub const REGIONS: &[&str] = &[
    "AC", "AL", "AP", "AM", "BA", "CE", "DF", "ES", "GO", "MA", "MT", "MS", "MG", "PA", "PB", "PR",
    "PE", "PI", "RJ", "RN", "RS", "RO", "RR", "SC", "SP", "SE", "TO",
];

pub fn size_by_id(id: u32) -> Option<&'static Size> {
    SIZES.iter().find(|s| s.id == id)
}

pub fn print_by_id(id: u32) -> Option<&'static Print> {
    PRINTS.iter().find(|p| p.id == id)
}

/// Price label shared by every shirt
pub fn merchandise_price_label() -> String {
    format_brl(MERCHANDISE_PRICE)
}
