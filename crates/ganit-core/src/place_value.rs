//! Place-value labels for column headers
//!
//! Columns are labelled using the Indian numbering vocabulary, so the table
//! goes ones, tens, hundreds, thousands, ten-thousands, lakh, ten-lakh, crore
//! and ten-crore.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator};

use crate::{GridError, Result};

/// A place value, ordered from least to most significant
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PlaceValue {
    Ones,
    Tens,
    Hundreds,
    Thousands,
    TenThousands,
    Lakh,
    TenLakh,
    Crore,
    TenCrore,
}

impl PlaceValue {
    /// Number of labelled places
    pub const COUNT: usize = 9;

    /// Short label shown in the grid header
    pub fn abbreviation(&self) -> &'static str {
        match self {
            PlaceValue::Ones => "O",
            PlaceValue::Tens => "T",
            PlaceValue::Hundreds => "H",
            PlaceValue::Thousands => "Th",
            PlaceValue::TenThousands => "TTh",
            PlaceValue::Lakh => "L",
            PlaceValue::TenLakh => "TL",
            PlaceValue::Crore => "C",
            PlaceValue::TenCrore => "TC",
        }
    }

    /// Human-readable name, e.g. "ten-thousands"
    pub fn name(&self) -> &'static str {
        match self {
            PlaceValue::Ones => "ones",
            PlaceValue::Tens => "tens",
            PlaceValue::Hundreds => "hundreds",
            PlaceValue::Thousands => "thousands",
            PlaceValue::TenThousands => "ten-thousands",
            PlaceValue::Lakh => "lakh",
            PlaceValue::TenLakh => "ten-lakh",
            PlaceValue::Crore => "crore",
            PlaceValue::TenCrore => "ten-crore",
        }
    }

    /// Place value of the digit `position` places left of the ones digit
    pub fn from_position(position: usize) -> Option<Self> {
        Self::iter().nth(position)
    }

    /// Header labels for a grid of `num_cols` columns, most significant first
    pub fn header(num_cols: usize) -> Result<Vec<PlaceValue>> {
        if num_cols == 0 {
            return Err(GridError::invalid_column_count(
                num_cols,
                "at least one column is required",
            ));
        }
        if num_cols > Self::COUNT {
            return Err(GridError::invalid_column_count(
                num_cols,
                format!("place-value labels exist for at most {} columns", Self::COUNT),
            ));
        }

        let mut labels: Vec<PlaceValue> = Self::iter().take(num_cols).collect();
        labels.reverse();
        Ok(labels)
    }
}
