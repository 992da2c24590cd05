pub const COMPANY_NAME: &str = "CRAIK ELECTRICAL";
pub const APP_VERSION: &str = "v1.1.0-VISION";
pub const CONTACT_PHONE: &str = "07748 317766";
/// Оператор, отображаемый в HUD Vision Link
pub const FIELD_OPERATOR: &str = "S_CRAIK_01";
