//! Attribute groups (the sections of the request form)

use std::fmt;

/// Section an attribute is shown under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Group {
    Basic,
    Units,
    Sales,
    Purchasing,
    Mrp,
    Storage,
    Quality,
    Accounting,
    Trade,
    Classification,
    Request,
}

impl Group {
    /// All groups in form order
    pub const ALL: &'static [Group] = &[
        Group::Basic,
        Group::Units,
        Group::Sales,
        Group::Purchasing,
        Group::Mrp,
        Group::Storage,
        Group::Quality,
        Group::Accounting,
        Group::Trade,
        Group::Classification,
        Group::Request,
    ];

    /// Display title of the group
    pub fn title(&self) -> &'static str {
        match self {
            Group::Basic => "Basic Data",
            Group::Units => "Unit Conversion",
            Group::Sales => "Sales",
            Group::Purchasing => "Purchasing",
            Group::Mrp => "Plant / MRP",
            Group::Storage => "Storage",
            Group::Quality => "Quality",
            Group::Accounting => "Accounting",
            Group::Trade => "Foreign Trade",
            Group::Classification => "Classification",
            Group::Request => "Request",
        }
    }

    /// Parse a group from user input (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "basic" => Some(Group::Basic),
            "units" | "unit" => Some(Group::Units),
            "sales" => Some(Group::Sales),
            "purchasing" => Some(Group::Purchasing),
            "mrp" | "plant" => Some(Group::Mrp),
            "storage" => Some(Group::Storage),
            "quality" | "qm" => Some(Group::Quality),
            "accounting" | "costing" => Some(Group::Accounting),
            "trade" => Some(Group::Trade),
            "classification" | "class" => Some(Group::Classification),
            "request" => Some(Group::Request),
            _ => None,
        }
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}
