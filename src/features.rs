use std::fmt;

use crate::{PredictorError, Result};

/// A yes/no attribute of the house, encoded as a 0/1 indicator column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryAttribute {
    MainRoad,
    GuestRoom,
    Basement,
    HotWaterHeating,
    AirConditioning,
    PrefArea,
}

impl BinaryAttribute {
    /// All binary attributes in form order.
    pub const ALL: [BinaryAttribute; 6] = [
        Self::MainRoad,
        Self::GuestRoom,
        Self::Basement,
        Self::HotWaterHeating,
        Self::AirConditioning,
        Self::PrefArea,
    ];

    /// The schema column this attribute populates.
    pub fn column(self) -> &'static str {
        match self {
            Self::MainRoad => "mainroad",
            Self::GuestRoom => "guestroom",
            Self::Basement => "basement",
            Self::HotWaterHeating => "hotwaterheating",
            Self::AirConditioning => "airconditioning",
            Self::PrefArea => "prefarea",
        }
    }

    /// The human-readable label shown by the collector.
    pub fn label(self) -> &'static str {
        match self {
            Self::MainRoad => "Mainroad",
            Self::GuestRoom => "Guestroom",
            Self::Basement => "Basement",
            Self::HotWaterHeating => "Hotwaterheating",
            Self::AirConditioning => "Airconditioning",
            Self::PrefArea => "Prefarea",
        }
    }

    pub fn from_column(column: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.column() == column)
    }
}

/// The answer to a yes/no attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum YesNo {
    #[default]
    No,
    Yes,
}

impl YesNo {
    /// Select box options, default first.
    pub const OPTIONS: [YesNo; 2] = [Self::No, Self::Yes];

    pub fn label(self) -> &'static str {
        match self {
            Self::No => "No",
            Self::Yes => "Yes",
        }
    }

    pub fn indicator(self) -> f64 {
        match self {
            Self::No => 0.0,
            Self::Yes => 1.0,
        }
    }

    /// Parses `yes`/`no` (any case), `y`/`n` or `1`/`0`.
    ///
    /// # Errors
    /// Returns `InvalidInput` on anything else.
    pub fn parse(raw: &str) -> Result<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "yes" | "y" | "1" => Ok(Self::Yes),
            "no" | "n" | "0" => Ok(Self::No),
            other => Err(PredictorError::InvalidInput(format!(
                "expected Yes or No, got '{other}'"
            ))),
        }
    }
}

impl fmt::Display for YesNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Inclusive bounds, step and default of a slider input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliderRange {
    pub min: i64,
    pub max: i64,
    pub step: i64,
    pub default: i64,
}

impl SliderRange {
    /// Whether `value` is reachable by the slider: within bounds and on the step grid.
    pub fn admits(&self, value: i64) -> bool {
        (self.min..=self.max).contains(&value) && (value - self.min) % self.step == 0
    }
}

/// A scalar attribute of the house, collected as a bounded integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericAttribute {
    Area,
    Bedrooms,
    Bathrooms,
    Stories,
}

impl NumericAttribute {
    /// All numeric attributes in form order.
    pub const ALL: [NumericAttribute; 4] =
        [Self::Area, Self::Bedrooms, Self::Bathrooms, Self::Stories];

    pub fn column(self) -> &'static str {
        match self {
            Self::Area => "area",
            Self::Bedrooms => "bedrooms",
            Self::Bathrooms => "bathrooms",
            Self::Stories => "stories",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Area => "Area (sq ft)",
            Self::Bedrooms => "Bedrooms",
            Self::Bathrooms => "Bathrooms",
            Self::Stories => "Stories",
        }
    }

    pub fn range(self) -> SliderRange {
        match self {
            Self::Area => SliderRange {
                min: 100,
                max: 10_000,
                step: 100,
                default: 500,
            },
            Self::Bedrooms => SliderRange {
                min: 1,
                max: 10,
                step: 1,
                default: 2,
            },
            Self::Bathrooms => SliderRange {
                min: 1,
                max: 10,
                step: 1,
                default: 2,
            },
            Self::Stories => SliderRange {
                min: 1,
                max: 10,
                step: 1,
                default: 1,
            },
        }
    }

    pub fn from_column(column: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.column() == column)
    }
}

/// A numeric value already checked against its attribute's slider range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundedValue {
    attribute: NumericAttribute,
    value: i64,
}

impl BoundedValue {
    /// Creates a bounded value.
    ///
    /// # Errors
    /// Returns `OutOfRange` if `value` is not reachable by the attribute's slider.
    pub fn new(attribute: NumericAttribute, value: i64) -> Result<Self> {
        let range = attribute.range();
        if !range.admits(value) {
            return Err(PredictorError::OutOfRange {
                field: attribute.label(),
                value,
                min: range.min,
                max: range.max,
                step: range.step,
            });
        }

        Ok(Self { attribute, value })
    }

    /// The slider's default value for `attribute`.
    pub fn default_for(attribute: NumericAttribute) -> Self {
        Self {
            attribute,
            value: attribute.range().default,
        }
    }

    pub fn attribute(&self) -> NumericAttribute {
        self.attribute
    }

    pub fn get(&self) -> i64 {
        self.value
    }
}

/// Furnishing status, a three-way categorical with `Unfurnished` as reference category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Furnishing {
    #[default]
    Unfurnished,
    SemiFurnished,
    Furnished,
}

impl Furnishing {
    /// Select box options, default first.
    pub const OPTIONS: [Furnishing; 3] = [Self::Unfurnished, Self::SemiFurnished, Self::Furnished];

    pub fn label(self) -> &'static str {
        match self {
            Self::Unfurnished => "Unfurnished",
            Self::SemiFurnished => "Semi-Furnished",
            Self::Furnished => "Furnished",
        }
    }

    /// The indicator column set to 1 for this category, or `None` for the
    /// reference category, which is represented by all indicators being 0.
    pub fn indicator_column(self) -> Option<&'static str> {
        match self {
            Self::Unfurnished => None,
            Self::SemiFurnished => Some("furnishingstatus_semi_furnished"),
            Self::Furnished => Some("furnishingstatus_furnished"),
        }
    }

    /// Every indicator column of the group, in schema order.
    pub fn indicator_columns() -> impl Iterator<Item = &'static str> {
        Self::OPTIONS.into_iter().filter_map(Self::indicator_column)
    }

    /// Parses an option label exactly as shown by the collector.
    ///
    /// # Errors
    /// Returns `InvalidInput` if `label` matches no option.
    pub fn from_label(label: &str) -> Result<Self> {
        Self::OPTIONS
            .into_iter()
            .find(|f| f.label() == label)
            .ok_or_else(|| {
                PredictorError::InvalidInput(format!("unknown furnishing status '{label}'"))
            })
    }
}

impl fmt::Display for Furnishing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
