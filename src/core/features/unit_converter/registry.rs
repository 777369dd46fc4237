//! Unit registry
//!
//! Immutable catalog of measurement categories and their units. Built once,
//! then shared by reference; every operation is a pure lookup.

use std::collections::HashSet;
use std::sync::{Arc, OnceLock};

use serde::Serialize;

use crate::shared::error::{AppError, AppResult};
use crate::shared::types::{CategoryDTO, UnitDTO};

use super::catalog;

/// Name of the category converted with affine formulas instead of factors.
pub const TEMPERATURE: &str = "Temperature";

static GLOBAL_REGISTRY: OnceLock<Arc<UnitRegistry>> = OnceLock::new();

/// Regional origin of a unit that is not part of the SI/international set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Region {
    Indian,
    Us,
    Imperial,
}

impl Region {
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Indian => "Indian",
            Region::Us => "US",
            Region::Imperial => "Imperial",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Unit {
    pub name: String,
    pub symbol: String,
    /// Multiplier into the category's base unit. `None` for affine scales.
    pub factor: Option<f64>,
    pub is_base: bool,
    pub region: Option<Region>,
    pub aliases: Vec<String>,
}

impl Unit {
    pub fn new(name: impl Into<String>, symbol: impl Into<String>, factor: f64) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
            factor: Some(factor),
            is_base: false,
            region: None,
            aliases: Vec::new(),
        }
    }

    /// A unit on an affine scale (temperature), which has no base factor
    pub fn affine(name: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            factor: None,
            ..Self::new(name, symbol, 1.0)
        }
    }

    pub fn base(mut self) -> Self {
        self.is_base = true;
        self
    }

    pub fn region(mut self, region: Region) -> Self {
        self.region = Some(region);
        self
    }

    pub fn aliases(mut self, aliases: &[&str]) -> Self {
        self.aliases = aliases.iter().map(|a| a.to_string()).collect();
        self
    }

    /// `needle` must already be trimmed and lowercased.
    fn matches(&self, needle: &str) -> bool {
        let name = self.name.to_lowercase();
        name == needle
            || self.symbol.to_lowercase() == needle
            || self.aliases.iter().any(|a| a.to_lowercase() == needle)
            // "mile" for "Miles"
            || name.strip_suffix('s') == Some(needle)
    }

    pub fn to_dto(&self, category: &str) -> UnitDTO {
        UnitDTO {
            id: self.symbol.clone(),
            label: self.name.clone(),
            category: category.to_string(),
            region: self.region.map(|r| r.as_str().to_string()),
            is_base: self.is_base,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub name: String,
    pub units: Vec<Unit>,
}

impl Category {
    pub fn new(name: impl Into<String>, units: Vec<Unit>) -> Self {
        Self {
            name: name.into(),
            units,
        }
    }

    pub fn is_temperature(&self) -> bool {
        self.name.eq_ignore_ascii_case(TEMPERATURE)
    }

    pub fn base_unit(&self) -> Option<&Unit> {
        self.units.iter().find(|u| u.is_base)
    }

    /// Unit by canonical name (case-insensitive)
    pub fn unit(&self, name: &str) -> Option<&Unit> {
        self.units.iter().find(|u| u.name.eq_ignore_ascii_case(name.trim()))
    }

    /// Unit by name, symbol or alias (case-insensitive)
    pub fn find(&self, name_or_symbol: &str) -> Option<&Unit> {
        let needle = name_or_symbol.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }
        self.units.iter().find(|u| u.matches(&needle))
    }

    pub fn to_dto(&self) -> CategoryDTO {
        CategoryDTO {
            name: self.name.clone(),
            base_unit: self.base_unit().map(|u| u.name.clone()),
            units: self.units.iter().map(|u| u.to_dto(&self.name)).collect(),
        }
    }

    fn validate(&self) -> AppResult<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::Validation("Category name cannot be empty".to_string()));
        }

        let mut names = HashSet::new();
        for unit in &self.units {
            if !names.insert(unit.name.to_lowercase()) {
                return Err(AppError::Validation(format!(
                    "Duplicate unit '{}' in category '{}'",
                    unit.name, self.name
                )));
            }

            if self.is_temperature() {
                continue;
            }

            match unit.factor {
                Some(factor) if factor.is_finite() && factor > 0.0 => {
                    if unit.is_base && factor != 1.0 {
                        return Err(AppError::Validation(format!(
                            "Base unit '{}' must have factor 1, got {}",
                            unit.name, factor
                        )));
                    }
                }
                _ => {
                    return Err(AppError::Validation(format!(
                        "Unit '{}' in category '{}' needs a finite positive factor",
                        unit.name, self.name
                    )));
                }
            }
        }

        if self.units.iter().filter(|u| u.is_base).count() > 1 {
            return Err(AppError::Validation(format!(
                "Category '{}' has more than one base unit",
                self.name
            )));
        }

        Ok(())
    }
}

/// Read-only collection of categories, in registration order
#[derive(Debug, Clone, PartialEq)]
pub struct UnitRegistry {
    categories: Vec<Category>,
}

impl UnitRegistry {
    pub fn new(categories: Vec<Category>) -> AppResult<Self> {
        let mut names = HashSet::new();
        for category in &categories {
            category.validate()?;
            if !names.insert(category.name.to_lowercase()) {
                return Err(AppError::Validation(format!(
                    "Duplicate category '{}'",
                    category.name
                )));
            }
        }

        Ok(Self { categories })
    }

    /// The built-in Sutradhaar catalog
    pub fn standard() -> Self {
        Self {
            categories: catalog::standard_categories(),
        }
    }

    /// Process-wide standard registry, built on first use
    pub fn global() -> &'static Arc<UnitRegistry> {
        GLOBAL_REGISTRY.get_or_init(|| {
            let registry = Self::standard();
            tracing::debug!(
                categories = registry.categories.len(),
                units = registry.units().count(),
                "unit registry initialised"
            );
            Arc::new(registry)
        })
    }

    pub fn list_categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name.trim()))
    }

    /// All units paired with their owning category, in registration order
    pub fn units(&self) -> impl Iterator<Item = (&Category, &Unit)> {
        self.categories
            .iter()
            .flat_map(|c| c.units.iter().map(move |u| (c, u)))
    }

    /// Match by name, symbol or alias, case-insensitively.
    ///
    /// When several categories contain a match (e.g. a shared symbol), the
    /// first category in registration order wins. Use [`Self::find_unit_in`]
    /// for a category-scoped lookup.
    pub fn find_unit(&self, name_or_symbol: &str) -> Option<(&Category, &Unit)> {
        self.categories
            .iter()
            .find_map(|c| c.find(name_or_symbol).map(|u| (c, u)))
    }

    pub fn find_unit_in(&self, category: &str, name_or_symbol: &str) -> Option<&Unit> {
        self.category(category)?.find(name_or_symbol)
    }

    /// Multiplier from `unit_name` to its category's base unit
    pub fn factor_of(&self, unit_name: &str) -> Option<f64> {
        self.units()
            .find(|(_, u)| u.name.eq_ignore_ascii_case(unit_name.trim()))
            .and_then(|(_, u)| u.factor)
    }

    pub fn factor_in(&self, category: &str, unit_name: &str) -> Option<f64> {
        self.category(category)?.unit(unit_name)?.factor
    }

    /// `"<unit name> (<symbol>)"` for every unit, as shown to extraction services
    pub fn catalog(&self) -> Vec<String> {
        self.units()
            .map(|(_, u)| format!("{} ({})", u.name, u.symbol))
            .collect()
    }
}
