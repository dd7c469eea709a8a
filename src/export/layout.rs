//! Fixed column layout of the bulk-load sheets
//!
//! The downstream loader matches columns by position and header code, so
//! both lists and the constant overrides below must not drift.

use crate::schema::AttrKey as K;

/// Name of the main sheet
pub const PRIMARY_SHEET: &str = "primary";

/// Name of the unit-conversion sheet
pub const SECONDARY_SHEET: &str = "conversion-units";

/// Class every exported material is assigned to
pub const CLASS_CODE: &str = "ZMAT_FOOD";

/// Class type of `CLASS_CODE`
pub const CLASS_TYPE: &str = "001";

/// Column order of the primary sheet
#[rustfmt::skip]
pub const PRIMARY_COLUMNS: &[K] = &[
    // Organisational levels first
    K::Matnr, K::Mtart, K::Mbrsh, K::Werks, K::Lgort, K::Vkorg, K::Vtweg,
    // Basic data
    K::Maktx, K::MaktxEn, K::Meins, K::Matkl, K::Bismt, K::Spart, K::Prdha, K::MtposMara,
    K::Brgew, K::Ntgew, K::Gewei, K::Volum, K::Voleh, K::Groes, K::Ean11, K::Numtp,
    K::Laeng, K::Breit, K::Hoehe, K::Meabm, K::Mstae, K::Mstde, K::Xchpf, K::Mhdrz,
    K::Mhdhb, K::Iprkz, K::Raube, K::Tempb, K::Tragr, K::Magrv, K::Zzbrand, K::Zzflavor,
    K::ZzpkgType,
    // Sales
    K::Dwerk, K::Sktof, K::Aumng, K::Lfmng, K::Scmng, K::Vrkme, K::Vmsta, K::Vmstd,
    K::Taxkm, K::Kondm, K::Ktgrm, K::Mtpos, K::Mvgr1, K::Mvgr2, K::Mvgr3, K::Mvgr4,
    K::Mvgr5, K::Ladgr, K::Mtvfp,
    // Purchasing
    K::Ekgrp, K::Bstme, K::Vabme, K::Kautb, K::Kordb, K::Webaz, K::Insmk, K::Usequ,
    K::Ekwsl,
    // MRP
    K::Disgr, K::Dismm, K::Dispo, K::Disls, K::Minbe, K::Bstmi, K::Bstma, K::Bstfe,
    K::Bstrf, K::Beskz, K::Sobsl, K::Lgpro, K::Lgfsb, K::Rgekz, K::Dzeit, K::Plifz,
    K::Fhori, K::Eisbe, K::Strgr, K::Vrmod, K::Vint1, K::Vint2, K::Sbdkz, K::Altsl,
    K::Kzaus, K::Perkz, K::Maabc, K::Fevor, K::Sfcpf, K::Ueeto, K::Uneto, K::Prctr,
    K::Sernp,
    // Storage
    K::Lgpbe, K::Lwmkb, K::Behvo, K::Ltkza, K::Ltkze, K::Lgbkz, K::Lhmg1, K::Lhme1,
    K::Lety1,
    // Quality
    K::Qmpur, K::Ssqss, K::Art,
    // Accounting and costing
    K::Bklas, K::Bwtty, K::Vprsv, K::Peinh, K::Stprs, K::Verpr, K::Hkmat, K::Ekalr,
    K::Ncost, K::Losgr, K::Awsls, K::Kosgr, K::Hrkft, K::Zplp1, K::Zpld1,
    // Foreign trade
    K::Stawn, K::Herkl, K::Herkr, K::Prefe,
    // Classification
    K::Class, K::Klart,
    K::Atnam01, K::Atwrt01, K::Atnam02, K::Atwrt02, K::Atnam03, K::Atwrt03,
    K::Atnam04, K::Atwrt04, K::Atnam05, K::Atwrt05, K::Atnam06, K::Atwrt06,
    K::Atnam07, K::Atwrt07, K::Atnam08, K::Atwrt08,
];

/// Column order of the unit-conversion sheet
pub const SECONDARY_COLUMNS: &[K] = &[K::Matnr, K::Meins, K::Meinh, K::Umrez, K::Umren];

/// Code exported for the `n`th characteristic name (`ZCHAR_01` ...)
pub fn characteristic_code(n: u8) -> String {
    format!("ZCHAR_{:02}", n)
}

/// The literal a classification-constant column always exports
///
/// Returns `None` for ordinary columns.
pub fn constant_value(key: K) -> Option<String> {
    match key {
        K::Class => Some(CLASS_CODE.to_string()),
        K::Klart => Some(CLASS_TYPE.to_string()),
        _ => key.characteristic_index().map(characteristic_code),
    }
}
