//! Closed enumeration of attribute keys
//!
//! Declaration order is significant: snapshots iterate in this order and the
//! change detector reports differences in it. Export column order is defined
//! separately in `export::layout`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

macro_rules! define_keys {
    ($($variant:ident => $code:literal),* $(,)?) => {
        /// Every attribute a master record can carry
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum AttrKey {
            $(
                #[serde(rename = $code)]
                $variant,
            )*
        }

        impl AttrKey {
            /// All keys in declaration order
            pub const ALL: &'static [AttrKey] = &[$(AttrKey::$variant),*];

            /// Number of recognized attributes
            pub const COUNT: usize = Self::ALL.len();

            /// The external code of this attribute (used in storage and export headers)
            pub const fn code(self) -> &'static str {
                match self {
                    $(AttrKey::$variant => $code,)*
                }
            }

            /// Look up a key by its exact external code
            pub fn from_code(code: &str) -> Option<Self> {
                match code {
                    $($code => Some(AttrKey::$variant),)*
                    _ => None,
                }
            }
        }
    };
}

define_keys! {
    // Basic data
    Matnr => "MATNR",
    Mtart => "MTART",
    Mbrsh => "MBRSH",
    Maktx => "MAKTX",
    MaktxEn => "MAKTX_EN",
    Meins => "MEINS",
    Matkl => "MATKL",
    Bismt => "BISMT",
    Spart => "SPART",
    Prdha => "PRDHA",
    MtposMara => "MTPOS_MARA",
    Brgew => "BRGEW",
    Ntgew => "NTGEW",
    Gewei => "GEWEI",
    Volum => "VOLUM",
    Voleh => "VOLEH",
    Groes => "GROES",
    Ean11 => "EAN11",
    Numtp => "NUMTP",
    Laeng => "LAENG",
    Breit => "BREIT",
    Hoehe => "HOEHE",
    Meabm => "MEABM",
    Mstae => "MSTAE",
    Mstde => "MSTDE",
    Xchpf => "XCHPF",
    Mhdrz => "MHDRZ",
    Mhdhb => "MHDHB",
    Iprkz => "IPRKZ",
    Raube => "RAUBE",
    Tempb => "TEMPB",
    Tragr => "TRAGR",
    Magrv => "MAGRV",
    Zzbrand => "ZZBRAND",
    Zzflavor => "ZZFLAVOR",
    ZzpkgType => "ZZPKG_TYPE",
    // Unit conversion
    Meinh => "MEINH",
    Umrez => "UMREZ",
    Umren => "UMREN",
    // Sales
    Vkorg => "VKORG",
    Vtweg => "VTWEG",
    Dwerk => "DWERK",
    Sktof => "SKTOF",
    Aumng => "AUMNG",
    Lfmng => "LFMNG",
    Scmng => "SCMNG",
    Vrkme => "VRKME",
    Vmsta => "VMSTA",
    Vmstd => "VMSTD",
    Taxkm => "TAXKM",
    Kondm => "KONDM",
    Ktgrm => "KTGRM",
    Mtpos => "MTPOS",
    Mvgr1 => "MVGR1",
    Mvgr2 => "MVGR2",
    Mvgr3 => "MVGR3",
    Mvgr4 => "MVGR4",
    Mvgr5 => "MVGR5",
    Ladgr => "LADGR",
    Mtvfp => "MTVFP",
    // Purchasing
    Ekgrp => "EKGRP",
    Bstme => "BSTME",
    Vabme => "VABME",
    Kautb => "KAUTB",
    Kordb => "KORDB",
    Webaz => "WEBAZ",
    Insmk => "INSMK",
    Usequ => "USEQU",
    Ekwsl => "EKWSL",
    // Plant / MRP
    Werks => "WERKS",
    Disgr => "DISGR",
    Dismm => "DISMM",
    Dispo => "DISPO",
    Disls => "DISLS",
    Minbe => "MINBE",
    Bstmi => "BSTMI",
    Bstma => "BSTMA",
    Bstfe => "BSTFE",
    Bstrf => "BSTRF",
    Beskz => "BESKZ",
    Sobsl => "SOBSL",
    Lgpro => "LGPRO",
    Lgfsb => "LGFSB",
    Rgekz => "RGEKZ",
    Dzeit => "DZEIT",
    Plifz => "PLIFZ",
    Fhori => "FHORI",
    Eisbe => "EISBE",
    Strgr => "STRGR",
    Vrmod => "VRMOD",
    Vint1 => "VINT1",
    Vint2 => "VINT2",
    Sbdkz => "SBDKZ",
    Altsl => "ALTSL",
    Kzaus => "KZAUS",
    Perkz => "PERKZ",
    Maabc => "MAABC",
    Fevor => "FEVOR",
    Sfcpf => "SFCPF",
    Ueeto => "UEETO",
    Uneto => "UNETO",
    Prctr => "PRCTR",
    Sernp => "SERNP",
    // Storage
    Lgort => "LGORT",
    Lgpbe => "LGPBE",
    Lwmkb => "LWMKB",
    Behvo => "BEHVO",
    Ltkza => "LTKZA",
    Ltkze => "LTKZE",
    Lgbkz => "LGBKZ",
    Lhmg1 => "LHMG1",
    Lhme1 => "LHME1",
    Lety1 => "LETY1",
    // Quality
    Qmpur => "QMPUR",
    Ssqss => "SSQSS",
    Art => "ART",
    // Accounting / costing
    Bklas => "BKLAS",
    Bwtty => "BWTTY",
    Vprsv => "VPRSV",
    Peinh => "PEINH",
    Stprs => "STPRS",
    Verpr => "VERPR",
    Hkmat => "HKMAT",
    Ekalr => "EKALR",
    Ncost => "NCOST",
    Losgr => "LOSGR",
    Awsls => "AWSLS",
    Kosgr => "KOSGR",
    Hrkft => "HRKFT",
    Zplp1 => "ZPLP1",
    Zpld1 => "ZPLD1",
    // Foreign trade
    Stawn => "STAWN",
    Herkl => "HERKL",
    Herkr => "HERKR",
    Prefe => "PREFE",
    // Classification
    Class => "CLASS",
    Klart => "KLART",
    Atnam01 => "ATNAM_01",
    Atwrt01 => "ATWRT_01",
    Atnam02 => "ATNAM_02",
    Atwrt02 => "ATWRT_02",
    Atnam03 => "ATNAM_03",
    Atwrt03 => "ATWRT_03",
    Atnam04 => "ATNAM_04",
    Atwrt04 => "ATWRT_04",
    Atnam05 => "ATNAM_05",
    Atwrt05 => "ATWRT_05",
    Atnam06 => "ATNAM_06",
    Atwrt06 => "ATWRT_06",
    Atnam07 => "ATNAM_07",
    Atwrt07 => "ATWRT_07",
    Atnam08 => "ATNAM_08",
    Atwrt08 => "ATWRT_08",
    // Request bookkeeping
    ZzreqNote => "ZZREQ_NOTE",
}

impl AttrKey {
    /// Position of a characteristic-name key within the characteristic family (1-based)
    pub fn characteristic_index(self) -> Option<u8> {
        match self {
            AttrKey::Atnam01 => Some(1),
            AttrKey::Atnam02 => Some(2),
            AttrKey::Atnam03 => Some(3),
            AttrKey::Atnam04 => Some(4),
            AttrKey::Atnam05 => Some(5),
            AttrKey::Atnam06 => Some(6),
            AttrKey::Atnam07 => Some(7),
            AttrKey::Atnam08 => Some(8),
            _ => None,
        }
    }
}

impl fmt::Display for AttrKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for AttrKey {
    type Err = String;

    /// Parse a key code, case-insensitively
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_uppercase();
        Self::from_code(&code).ok_or_else(|| format!("Unknown attribute key: '{}'", s.trim()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_codes_are_unique() {
        let codes: HashSet<_> = AttrKey::ALL.iter().map(|k| k.code()).collect();
        assert_eq!(codes.len(), AttrKey::COUNT);
    }

    #[test]
    fn test_from_code_round_trip() {
        for key in AttrKey::ALL {
            assert_eq!(AttrKey::from_code(key.code()), Some(*key));
        }
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("maktx".parse::<AttrKey>().unwrap(), AttrKey::Maktx);
        assert_eq!(" ATNAM_03 ".parse::<AttrKey>().unwrap(), AttrKey::Atnam03);
        assert!("NOPE".parse::<AttrKey>().is_err());
    }

    #[test]
    fn test_declaration_order_is_ord() {
        assert!(AttrKey::Matnr < AttrKey::Maktx);
        assert!(AttrKey::Maktx < AttrKey::ZzreqNote);
    }

    #[test]
    fn test_characteristic_index() {
        assert_eq!(AttrKey::Atnam01.characteristic_index(), Some(1));
        assert_eq!(AttrKey::Atnam08.characteristic_index(), Some(8));
        assert_eq!(AttrKey::Atwrt01.characteristic_index(), None);
        assert_eq!(AttrKey::Maktx.characteristic_index(), None);
    }

    #[test]
    fn test_serde_uses_code() {
        let json = serde_json::to_string(&AttrKey::MaktxEn).unwrap();
        assert_eq!(json, "\"MAKTX_EN\"");
    }
}
