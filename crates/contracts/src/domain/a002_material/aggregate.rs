use crate::domain::common::{AggregateId, AggregateRoot};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Порог, выше которого маржа считается здоровой (подсвечивается зелёным)
pub const HEALTHY_MARGIN_PERCENT: f64 = 20.0;

/// Минимальное количество единиц, которое можно записать
pub const MIN_QUANTITY: f64 = 1.0;

/// ID материала: `M1` у демо-данных, `M-<uuid>` у записанных на объекте
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MaterialId(pub String);

impl MaterialId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Сгенерировать ID для новой записи
    pub fn generate() -> Self {
        Self(format!("M-{}", Uuid::new_v4().simple()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl AggregateId for MaterialId {
    fn as_string(&self) -> String {
        self.0.clone()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        let s = s.trim();
        if s.is_empty() {
            return Err("Material ID cannot be empty".into());
        }
        Ok(Self(s.to_string()))
    }
}

/// Материал, списанный на работу
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    pub id: MaterialId,
    pub name: String,
    /// Количество упаковок/единиц
    pub quantity: f64,
    /// Количество в одной единице (например, 100 для бухты 100м)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_quantity: Option<f64>,
    pub unit_price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_cost: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,
}

impl Material {
    /// Простая позиция без упаковки, себестоимости и штрихкода
    pub fn simple(id: &str, name: &str, quantity: f64, unit_price: f64) -> Self {
        Self {
            id: MaterialId::new(id),
            name: name.to_string(),
            quantity,
            unit_quantity: None,
            unit_price,
            unit_cost: None,
            description: None,
            barcode: None,
        }
    }

    fn pack_size(&self) -> Option<f64> {
        self.unit_quantity.filter(|u| *u > 1.0)
    }

    /// Итоговое количество: quantity × unit_quantity (или 1)
    pub fn total_quantity(&self) -> f64 {
        self.quantity * self.unit_quantity.filter(|u| *u != 0.0).unwrap_or(1.0)
    }

    /// `"2 x 100"` для упаковок, `"2"` для штучных позиций
    pub fn quantity_label(&self) -> String {
        match self.pack_size() {
            Some(unit) => format!("{} x {}", self.quantity, unit),
            None => format!("{}", self.quantity),
        }
    }

    /// Суффикс упаковки для списка последних записей: `" x 100"` или пусто
    pub fn unit_label(&self) -> String {
        self.pack_size()
            .map(|unit| format!(" x {}", unit))
            .unwrap_or_default()
    }

    /// Показывать ли итог отдельно (только для упаковок)
    pub fn has_pack_total(&self) -> bool {
        self.pack_size().is_some()
    }

    /// Текст всплывающей подсказки на чипе материала
    pub fn hint(&self) -> String {
        let mut hint = self.description.clone().unwrap_or_default();
        if let Some(barcode) = &self.barcode {
            hint.push_str(&format!(" (Barcode: {})", barcode));
        }
        if let Some(cost) = self.unit_cost.filter(|c| *c != 0.0) {
            hint.push_str(&format!(" (Cost: £{})", cost));
        }
        hint
    }

    /// `£120.00 / UNIT`
    pub fn price_label(&self) -> String {
        format!("£{:.2} / UNIT", self.unit_price)
    }
}

impl AggregateRoot for Material {
    type Id = MaterialId;

    fn id(&self) -> Self::Id {
        self.id.clone()
    }

    fn code(&self) -> &str {
        self.id.value()
    }

    fn description(&self) -> &str {
        &self.name
    }

    fn aggregate_index() -> &'static str {
        "a002"
    }

    fn collection_name() -> &'static str {
        "material"
    }

    fn element_name() -> &'static str {
        "Material"
    }

    fn list_name() -> &'static str {
        "Materials"
    }
}

/// Оценка маржи по себестоимости и цене
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarginEstimate {
    pub profit: f64,
    pub margin_percent: f64,
}

impl MarginEstimate {
    pub fn is_healthy(&self) -> bool {
        self.margin_percent > HEALTHY_MARGIN_PERCENT
    }

    /// `£5.00 PROFIT`
    pub fn profit_label(&self) -> String {
        format!("£{:.2} PROFIT", self.profit)
    }

    /// `25.0%`
    pub fn margin_label(&self) -> String {
        format!("{:.1}%", self.margin_percent)
    }
}

/// Разбор числового поля формы: пробелы обрезаются, мусор считается пустым
fn parse_amount(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Состояние формы LOG MATERIALS (сырой текст полей ввода)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialForm {
    pub name: String,
    pub quantity: String,
    pub unit_quantity: String,
    pub unit_price: String,
    pub unit_cost: String,
    pub description: String,
    pub barcode: String,
}

impl Default for MaterialForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            quantity: "1".into(),
            unit_quantity: "1".into(),
            unit_price: String::new(),
            unit_cost: String::new(),
            description: String::new(),
            barcode: String::new(),
        }
    }
}

impl MaterialForm {
    /// Итоговое количество для поля TOTAL LOGGED QTY
    ///
    /// Нераспознанное количество даёт 0, нераспознанная (или нулевая)
    /// упаковка считается за 1.
    pub fn total_quantity(&self) -> f64 {
        let quantity = parse_amount(&self.quantity).unwrap_or(0.0);
        let per_unit = parse_amount(&self.unit_quantity)
            .filter(|v| *v != 0.0)
            .unwrap_or(1.0);
        quantity * per_unit
    }

    /// Маржа есть только когда и себестоимость, и цена больше нуля
    pub fn margin(&self) -> Option<MarginEstimate> {
        let cost = parse_amount(&self.unit_cost).unwrap_or(0.0);
        let price = parse_amount(&self.unit_price).unwrap_or(0.0);
        if cost > 0.0 && price > 0.0 {
            let profit = price - cost;
            Some(MarginEstimate {
                profit,
                margin_percent: profit / price * 100.0,
            })
        } else {
            None
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Part name is required".into());
        }
        match parse_amount(&self.quantity) {
            Some(q) if q >= MIN_QUANTITY => Ok(()),
            _ => Err(format!("Units (qty) must be a number of at least {}", MIN_QUANTITY)),
        }
    }

    /// Записать отсканированный штрихкод в форму
    pub fn with_barcode(mut self, code: impl Into<String>) -> Self {
        self.barcode = code.into();
        self
    }

    /// Собрать материал из формы
    pub fn to_material(&self, id: MaterialId) -> Result<Material, String> {
        self.validate()?;

        let non_blank = |raw: &str| {
            let trimmed = raw.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        };

        Ok(Material {
            id,
            name: self.name.clone(),
            quantity: parse_amount(&self.quantity).unwrap_or(0.0),
            unit_quantity: Some(
                parse_amount(&self.unit_quantity)
                    .filter(|v| *v != 0.0)
                    .unwrap_or(1.0),
            ),
            unit_price: parse_amount(&self.unit_price).unwrap_or(0.0),
            unit_cost: parse_amount(&self.unit_cost),
            description: non_blank(&self.description),
            barcode: non_blank(&self.barcode),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(quantity: &str, unit_quantity: &str, cost: &str, price: &str) -> MaterialForm {
        MaterialForm {
            name: "2.5mm T+E".into(),
            quantity: quantity.into(),
            unit_quantity: unit_quantity.into(),
            unit_cost: cost.into(),
            unit_price: price.into(),
            ..MaterialForm::default()
        }
    }

    #[test]
    fn test_total_quantity() {
        assert_eq!(form("2", "100", "", "").total_quantity(), 200.0);
        assert_eq!(form("1", "1", "", "").total_quantity(), 1.0);
        assert_eq!(form("", "100", "", "").total_quantity(), 0.0);
        assert_eq!(form("3", "", "", "").total_quantity(), 3.0);
        assert_eq!(form("3", "0", "", "").total_quantity(), 3.0);
        assert_eq!(form("2.5", "4", "", "").total_quantity(), 10.0);
    }

    #[test]
    fn test_margin_requires_cost_and_price() {
        assert!(form("1", "1", "", "10").margin().is_none());
        assert!(form("1", "1", "5", "").margin().is_none());
        assert!(form("1", "1", "0", "10").margin().is_none());
        assert!(form("1", "1", "abc", "10").margin().is_none());
    }

    #[test]
    fn test_margin_values() {
        let margin = form("1", "1", "4.20", "6").margin().unwrap();
        assert!((margin.profit - 1.8).abs() < 1e-9);
        assert!((margin.margin_percent - 30.0).abs() < 1e-9);
        assert!(margin.is_healthy());
        assert_eq!(margin.profit_label(), "£1.80 PROFIT");
        assert_eq!(margin.margin_label(), "30.0%");

        let thin = form("1", "1", "9", "10").margin().unwrap();
        assert!(!thin.is_healthy());
        assert_eq!(thin.margin_label(), "10.0%");

        let loss = form("1", "1", "12", "10").margin().unwrap();
        assert_eq!(loss.profit_label(), "£-2.00 PROFIT");
        assert_eq!(loss.margin_label(), "-20.0%");
    }

    #[test]
    fn test_to_material_requires_name() {
        let mut f = MaterialForm::default();
        f.name = "   ".into();
        assert!(f.to_material(MaterialId::new("M-1")).is_err());
    }

    #[test]
    fn test_to_material_rejects_quantity_below_one() {
        for quantity in ["0", "-5", "0.5", "", "abc"] {
            let f = form(quantity, "1", "", "");
            assert!(f.validate().is_err(), "quantity {:?} accepted", quantity);
            assert!(f.to_material(MaterialId::new("M-1")).is_err());
        }
        assert!(form("1", "1", "", "").validate().is_ok());
        assert!(form("1.5", "1", "", "").validate().is_ok());
    }

    #[test]
    fn test_to_material_parsing() {
        let mut f = form("2", "0", "", "");
        f.description = "  kitchen ring  ".into();
        f.barcode = "   ".into();
        let material = f.to_material(MaterialId::new("M-1")).unwrap();

        assert_eq!(material.quantity, 2.0);
        assert_eq!(material.unit_quantity, Some(1.0));
        assert_eq!(material.unit_price, 0.0);
        assert_eq!(material.unit_cost, None);
        assert_eq!(material.description.as_deref(), Some("kitchen ring"));
        assert_eq!(material.barcode, None);
    }

    #[test]
    fn test_to_material_keeps_cost_and_barcode() {
        let f = form("10", "1", "4.20", "6.50").with_barcode("501234567890");
        let material = f.to_material(MaterialId::new("M-2")).unwrap();
        assert_eq!(material.unit_cost, Some(4.2));
        assert_eq!(material.unit_price, 6.5);
        assert_eq!(material.barcode.as_deref(), Some("501234567890"));
    }

    #[test]
    fn test_labels() {
        let mut m = Material::simple("M1", "Dual RCD Board", 1.0, 120.0);
        assert_eq!(m.quantity_label(), "1");
        assert_eq!(m.unit_label(), "");
        assert!(!m.has_pack_total());
        assert_eq!(m.price_label(), "£120.00 / UNIT");

        m.quantity = 2.0;
        m.unit_quantity = Some(100.0);
        assert_eq!(m.quantity_label(), "2 x 100");
        assert_eq!(m.unit_label(), " x 100");
        assert_eq!(m.total_quantity(), 200.0);
        assert!(m.has_pack_total());
    }

    #[test]
    fn test_hint() {
        let mut m = Material::simple("M1", "Socket", 1.0, 6.0);
        assert_eq!(m.hint(), "");

        m.description = Some("Kitchen".into());
        m.barcode = Some("501234567890".into());
        m.unit_cost = Some(4.2);
        assert_eq!(m.hint(), "Kitchen (Barcode: 501234567890) (Cost: £4.2)");
    }

    #[test]
    fn test_generated_ids_are_unique() {
        let a = MaterialId::generate();
        let b = MaterialId::generate();
        assert_ne!(a, b);
        assert!(a.value().starts_with("M-"));
    }
}
