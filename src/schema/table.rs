//! The attribute table
//!
//! One entry per `AttrKey`, in declaration order. Entries are indexed by the
//! key's discriminant, which `test_table_matches_key_order` pins down.

use super::field::FieldKind::{self, Date, Flag, Hierarchy, Number, Select, Text};
use super::group::Group::{self, *};
use super::key::AttrKey as K;

/// Static description of one attribute
#[derive(Debug, Clone, Copy)]
pub struct AttributeDef {
    pub key: K,
    pub label: &'static str,
    pub group: Group,
    pub kind: FieldKind,
    /// Must be filled before the record is complete
    pub required: bool,
    /// Not editable; always carries its default
    pub fixed: bool,
    pub default: Option<&'static str>,
}

impl AttributeDef {
    const fn new(key: K, label: &'static str, group: Group, kind: FieldKind) -> Self {
        Self {
            key,
            label,
            group,
            kind,
            required: false,
            fixed: false,
            default: None,
        }
    }

    const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    const fn fixed(mut self, value: &'static str) -> Self {
        self.fixed = true;
        self.default = Some(value);
        self
    }

    const fn with_default(mut self, value: &'static str) -> Self {
        self.default = Some(value);
        self
    }
}

pub const MATERIAL_TYPES: &[&str] = &["FERT", "HALB", "ROH", "HAWA", "VERP"];
pub const INDUSTRY_SECTORS: &[&str] = &["F", "M", "C"];
pub const QUANTITY_UNITS: &[&str] = &["EA", "BOX", "PAC", "CS", "KG", "G", "L", "ML"];
pub const WEIGHT_UNITS: &[&str] = &["KG", "G"];
pub const VOLUME_UNITS: &[&str] = &["L", "ML", "M3"];
pub const DIMENSION_UNITS: &[&str] = &["MM", "CM", "M"];
pub const DIVISIONS: &[&str] = &["10", "20", "30"];
pub const EAN_CATEGORIES: &[&str] = &["HE", "HK", "UC"];
pub const SLED_PERIODS: &[&str] = &["D", "W", "M", "Y"];
pub const TAX_CLASSES: &[&str] = &["0", "1"];
pub const ITEM_CATEGORY_GROUPS: &[&str] = &["NORM", "LEIS", "DIEN"];
pub const MRP_TYPES: &[&str] = &["PD", "VB", "ND"];
pub const LOT_SIZES: &[&str] = &["EX", "FX", "HB", "WB", "MB"];
pub const PROCUREMENT_TYPES: &[&str] = &["E", "F", "X"];
pub const CONSUMPTION_MODES: &[&str] = &["1", "2", "3", "4"];
pub const DEPENDENT_REQUIREMENTS: &[&str] = &["1", "2"];
pub const ABC_INDICATORS: &[&str] = &["A", "B", "C"];
pub const PERIOD_INDICATORS: &[&str] = &["M", "W", "T"];
pub const PRICE_CONTROLS: &[&str] = &["S", "V"];
pub const AVAILABILITY_CHECKS: &[&str] = &["01", "02", "KP"];

/// Every attribute, indexed by `AttrKey as usize`
pub static ATTRIBUTES: [AttributeDef; K::COUNT] = [
    // Basic data
    AttributeDef::new(K::Matnr, "Material Number", Basic, Text),
    AttributeDef::new(K::Mtart, "Material Type", Basic, Select(MATERIAL_TYPES)).required(),
    AttributeDef::new(K::Mbrsh, "Industry Sector", Basic, Select(INDUSTRY_SECTORS)).fixed("F"),
    AttributeDef::new(K::Maktx, "Material Description", Basic, Text).required(),
    AttributeDef::new(K::MaktxEn, "English Description", Basic, Text),
    AttributeDef::new(K::Meins, "Base Unit of Measure", Basic, Select(QUANTITY_UNITS)).required(),
    AttributeDef::new(K::Matkl, "Material Group", Basic, Text).required(),
    AttributeDef::new(K::Bismt, "Old Material Number", Basic, Text),
    AttributeDef::new(K::Spart, "Division", Basic, Select(DIVISIONS)),
    AttributeDef::new(K::Prdha, "Product Hierarchy", Basic, Hierarchy).required(),
    AttributeDef::new(K::MtposMara, "General Item Category Group", Basic, Select(ITEM_CATEGORY_GROUPS)).fixed("NORM"),
    AttributeDef::new(K::Brgew, "Gross Weight", Basic, Number),
    AttributeDef::new(K::Ntgew, "Net Weight", Basic, Number),
    AttributeDef::new(K::Gewei, "Weight Unit", Basic, Select(WEIGHT_UNITS)).with_default("KG"),
    AttributeDef::new(K::Volum, "Volume", Basic, Number),
    AttributeDef::new(K::Voleh, "Volume Unit", Basic, Select(VOLUME_UNITS)),
    AttributeDef::new(K::Groes, "Size/Dimensions", Basic, Text),
    AttributeDef::new(K::Ean11, "EAN/UPC", Basic, Text),
    AttributeDef::new(K::Numtp, "EAN Category", Basic, Select(EAN_CATEGORIES)),
    AttributeDef::new(K::Laeng, "Length", Basic, Number),
    AttributeDef::new(K::Breit, "Width", Basic, Number),
    AttributeDef::new(K::Hoehe, "Height", Basic, Number),
    AttributeDef::new(K::Meabm, "Unit of Dimension", Basic, Select(DIMENSION_UNITS)).with_default("MM"),
    AttributeDef::new(K::Mstae, "Cross-plant Material Status", Basic, Text),
    AttributeDef::new(K::Mstde, "Status Valid From", Basic, Date),
    AttributeDef::new(K::Xchpf, "Batch Management", Basic, Flag),
    AttributeDef::new(K::Mhdrz, "Minimum Remaining Shelf Life", Basic, Number),
    AttributeDef::new(K::Mhdhb, "Total Shelf Life", Basic, Number),
    AttributeDef::new(K::Iprkz, "Period Indicator for SLED", Basic, Select(SLED_PERIODS)),
    AttributeDef::new(K::Raube, "Storage Conditions", Basic, Text),
    AttributeDef::new(K::Tempb, "Temperature Conditions", Basic, Text),
    AttributeDef::new(K::Tragr, "Transportation Group", Basic, Text),
    AttributeDef::new(K::Magrv, "Material Group: Packaging", Basic, Text),
    AttributeDef::new(K::Zzbrand, "Brand", Basic, Text),
    AttributeDef::new(K::Zzflavor, "Flavor", Basic, Text),
    AttributeDef::new(K::ZzpkgType, "Package Type", Basic, Text),
    // Unit conversion
    AttributeDef::new(K::Meinh, "Alternative Unit of Measure", Units, Select(QUANTITY_UNITS)),
    AttributeDef::new(K::Umrez, "Conversion Numerator", Units, Number),
    AttributeDef::new(K::Umren, "Conversion Denominator", Units, Number),
    // Sales
    AttributeDef::new(K::Vkorg, "Sales Organization", Sales, Text).required().with_default("1000"),
    AttributeDef::new(K::Vtweg, "Distribution Channel", Sales, Text).required().with_default("10"),
    AttributeDef::new(K::Dwerk, "Delivering Plant", Sales, Text),
    AttributeDef::new(K::Sktof, "Cash Discount", Sales, Flag),
    AttributeDef::new(K::Aumng, "Minimum Order Quantity", Sales, Number),
    AttributeDef::new(K::Lfmng, "Minimum Delivery Quantity", Sales, Number),
    AttributeDef::new(K::Scmng, "Delivery Unit", Sales, Number),
    AttributeDef::new(K::Vrkme, "Sales Unit", Sales, Select(QUANTITY_UNITS)),
    AttributeDef::new(K::Vmsta, "Distribution-chain Status", Sales, Text),
    AttributeDef::new(K::Vmstd, "Distribution Status Valid From", Sales, Date),
    AttributeDef::new(K::Taxkm, "Tax Classification", Sales, Select(TAX_CLASSES)).with_default("1"),
    AttributeDef::new(K::Kondm, "Material Pricing Group", Sales, Text),
    AttributeDef::new(K::Ktgrm, "Account Assignment Group", Sales, Text),
    AttributeDef::new(K::Mtpos, "Item Category Group", Sales, Select(ITEM_CATEGORY_GROUPS)),
    AttributeDef::new(K::Mvgr1, "Material Group 1", Sales, Text),
    AttributeDef::new(K::Mvgr2, "Material Group 2", Sales, Text),
    AttributeDef::new(K::Mvgr3, "Material Group 3", Sales, Text),
    AttributeDef::new(K::Mvgr4, "Material Group 4", Sales, Text),
    AttributeDef::new(K::Mvgr5, "Material Group 5", Sales, Text),
    AttributeDef::new(K::Ladgr, "Loading Group", Sales, Text),
    AttributeDef::new(K::Mtvfp, "Availability Check", Sales, Select(AVAILABILITY_CHECKS)),
    // Purchasing
    AttributeDef::new(K::Ekgrp, "Purchasing Group", Purchasing, Text),
    AttributeDef::new(K::Bstme, "Order Unit", Purchasing, Select(QUANTITY_UNITS)),
    AttributeDef::new(K::Vabme, "Variable Order Unit", Purchasing, Flag),
    AttributeDef::new(K::Kautb, "Automatic Purchase Order", Purchasing, Flag),
    AttributeDef::new(K::Kordb, "Source List", Purchasing, Flag),
    AttributeDef::new(K::Webaz, "GR Processing Time", Purchasing, Number),
    AttributeDef::new(K::Insmk, "Post to Inspection Stock", Purchasing, Flag),
    AttributeDef::new(K::Usequ, "Quota Arrangement Usage", Purchasing, Text),
    AttributeDef::new(K::Ekwsl, "Purchasing Value Key", Purchasing, Text),
    // Plant / MRP
    AttributeDef::new(K::Werks, "Plant", Mrp, Text).required().with_default("1000"),
    AttributeDef::new(K::Disgr, "MRP Group", Mrp, Text),
    AttributeDef::new(K::Dismm, "MRP Type", Mrp, Select(MRP_TYPES)),
    AttributeDef::new(K::Dispo, "MRP Controller", Mrp, Text),
    AttributeDef::new(K::Disls, "Lot Size", Mrp, Select(LOT_SIZES)),
    AttributeDef::new(K::Minbe, "Reorder Point", Mrp, Number),
    AttributeDef::new(K::Bstmi, "Minimum Lot Size", Mrp, Number),
    AttributeDef::new(K::Bstma, "Maximum Lot Size", Mrp, Number),
    AttributeDef::new(K::Bstfe, "Fixed Lot Size", Mrp, Number),
    AttributeDef::new(K::Bstrf, "Rounding Value", Mrp, Number),
    AttributeDef::new(K::Beskz, "Procurement Type", Mrp, Select(PROCUREMENT_TYPES)),
    AttributeDef::new(K::Sobsl, "Special Procurement", Mrp, Text),
    AttributeDef::new(K::Lgpro, "Production Storage Location", Mrp, Text),
    AttributeDef::new(K::Lgfsb, "Storage Location for EP", Mrp, Text),
    AttributeDef::new(K::Rgekz, "Backflush", Mrp, Flag),
    AttributeDef::new(K::Dzeit, "In-house Production Time", Mrp, Number),
    AttributeDef::new(K::Plifz, "Planned Delivery Time", Mrp, Number),
    AttributeDef::new(K::Fhori, "Scheduling Margin Key", Mrp, Text),
    AttributeDef::new(K::Eisbe, "Safety Stock", Mrp, Number),
    AttributeDef::new(K::Strgr, "Strategy Group", Mrp, Text),
    AttributeDef::new(K::Vrmod, "Consumption Mode", Mrp, Select(CONSUMPTION_MODES)),
    AttributeDef::new(K::Vint1, "Backward Consumption Period", Mrp, Number),
    AttributeDef::new(K::Vint2, "Forward Consumption Period", Mrp, Number),
    AttributeDef::new(K::Sbdkz, "Individual/Collective", Mrp, Select(DEPENDENT_REQUIREMENTS)),
    AttributeDef::new(K::Altsl, "Selection Method", Mrp, Text),
    AttributeDef::new(K::Kzaus, "Discontinuation Indicator", Mrp, Text),
    AttributeDef::new(K::Perkz, "Period Indicator", Mrp, Select(PERIOD_INDICATORS)),
    AttributeDef::new(K::Maabc, "ABC Indicator", Mrp, Select(ABC_INDICATORS)),
    AttributeDef::new(K::Fevor, "Production Supervisor", Mrp, Text),
    AttributeDef::new(K::Sfcpf, "Production Scheduling Profile", Mrp, Text),
    AttributeDef::new(K::Ueeto, "Overdelivery Tolerance", Mrp, Number),
    AttributeDef::new(K::Uneto, "Underdelivery Tolerance", Mrp, Number),
    AttributeDef::new(K::Prctr, "Profit Center", Mrp, Text).required(),
    AttributeDef::new(K::Sernp, "Serial Number Profile", Mrp, Text),
    // Storage
    AttributeDef::new(K::Lgort, "Storage Location", Storage, Text),
    AttributeDef::new(K::Lgpbe, "Storage Bin", Storage, Text),
    AttributeDef::new(K::Lwmkb, "Picking Area", Storage, Text),
    AttributeDef::new(K::Behvo, "Container Requirements", Storage, Text),
    AttributeDef::new(K::Ltkza, "Stock Removal", Storage, Text),
    AttributeDef::new(K::Ltkze, "Stock Placement", Storage, Text),
    AttributeDef::new(K::Lgbkz, "Storage Section Indicator", Storage, Text),
    AttributeDef::new(K::Lhmg1, "LE Quantity", Storage, Number),
    AttributeDef::new(K::Lhme1, "LE Unit", Storage, Select(QUANTITY_UNITS)),
    AttributeDef::new(K::Lety1, "Storage Unit Type", Storage, Text),
    // Quality
    AttributeDef::new(K::Qmpur, "QM Procurement Active", Quality, Flag),
    AttributeDef::new(K::Ssqss, "QM Control Key", Quality, Text),
    AttributeDef::new(K::Art, "Inspection Type", Quality, Text),
    // Accounting / costing
    AttributeDef::new(K::Bklas, "Valuation Class", Accounting, Text).required(),
    AttributeDef::new(K::Bwtty, "Valuation Category", Accounting, Text),
    AttributeDef::new(K::Vprsv, "Price Control", Accounting, Select(PRICE_CONTROLS)).with_default("S"),
    AttributeDef::new(K::Peinh, "Price Unit", Accounting, Number).with_default("1"),
    AttributeDef::new(K::Stprs, "Standard Price", Accounting, Number),
    AttributeDef::new(K::Verpr, "Moving Average Price", Accounting, Number),
    AttributeDef::new(K::Hkmat, "Material Origin", Accounting, Flag),
    AttributeDef::new(K::Ekalr, "With Quantity Structure", Accounting, Flag),
    AttributeDef::new(K::Ncost, "Do Not Cost", Accounting, Flag),
    AttributeDef::new(K::Losgr, "Costing Lot Size", Accounting, Number),
    AttributeDef::new(K::Awsls, "Variance Key", Accounting, Text),
    AttributeDef::new(K::Kosgr, "Overhead Group", Accounting, Text),
    AttributeDef::new(K::Hrkft, "Origin Group", Accounting, Text),
    AttributeDef::new(K::Zplp1, "Future Planned Price", Accounting, Number),
    AttributeDef::new(K::Zpld1, "Planned Price Date", Accounting, Date),
    // Foreign trade
    AttributeDef::new(K::Stawn, "Commodity Code", Trade, Text),
    AttributeDef::new(K::Herkl, "Country of Origin", Trade, Text),
    AttributeDef::new(K::Herkr, "Region of Origin", Trade, Text),
    AttributeDef::new(K::Prefe, "Preference Status", Trade, Text),
    // Classification
    AttributeDef::new(K::Class, "Class", Classification, Text).fixed("ZMAT_FOOD"),
    AttributeDef::new(K::Klart, "Class Type", Classification, Text).fixed("001"),
    AttributeDef::new(K::Atnam01, "Characteristic 1", Classification, Text).fixed("ZCHAR_01"),
    AttributeDef::new(K::Atwrt01, "Characteristic Value 1", Classification, Text),
    AttributeDef::new(K::Atnam02, "Characteristic 2", Classification, Text).fixed("ZCHAR_02"),
    AttributeDef::new(K::Atwrt02, "Characteristic Value 2", Classification, Text),
    AttributeDef::new(K::Atnam03, "Characteristic 3", Classification, Text).fixed("ZCHAR_03"),
    AttributeDef::new(K::Atwrt03, "Characteristic Value 3", Classification, Text),
    AttributeDef::new(K::Atnam04, "Characteristic 4", Classification, Text).fixed("ZCHAR_04"),
    AttributeDef::new(K::Atwrt04, "Characteristic Value 4", Classification, Text),
    AttributeDef::new(K::Atnam05, "Characteristic 5", Classification, Text).fixed("ZCHAR_05"),
    AttributeDef::new(K::Atwrt05, "Characteristic Value 5", Classification, Text),
    AttributeDef::new(K::Atnam06, "Characteristic 6", Classification, Text).fixed("ZCHAR_06"),
    AttributeDef::new(K::Atwrt06, "Characteristic Value 6", Classification, Text),
    AttributeDef::new(K::Atnam07, "Characteristic 7", Classification, Text).fixed("ZCHAR_07"),
    AttributeDef::new(K::Atwrt07, "Characteristic Value 7", Classification, Text),
    AttributeDef::new(K::Atnam08, "Characteristic 8", Classification, Text).fixed("ZCHAR_08"),
    AttributeDef::new(K::Atwrt08, "Characteristic Value 8", Classification, Text),
    // Request bookkeeping
    AttributeDef::new(K::ZzreqNote, "Request Note", Request, Text),
];
