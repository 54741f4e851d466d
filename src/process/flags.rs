/// Wind thresholds in knots, inclusive.
pub const TS_KT: i32 = 34;
pub const CAT1_KT: i32 = 64;
pub const CAT2_KT: i32 = 83;
pub const CAT3_KT: i32 = 96;
pub const CAT4_KT: i32 = 113;
pub const CAT5_KT: i32 = 137;

/// Status codes counted as tropical.
const TROPICAL_STATUSES: [&str; 2] = ["HU", "TS"];

/// Hurricane or tropical-storm designation. Expects a stripped status.
pub fn is_tropical(status: &str) -> bool {
    TROPICAL_STATUSES.contains(&status)
}

/// Highest intensity bucket reached by a wind speed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    TropicalStorm,
    Cat1,
    Cat2,
    Cat3,
    Cat4,
    Cat5,
}

impl Category {
    pub fn from_wind(knots: i32) -> Option<Self> {
        match knots {
            k if k >= CAT5_KT => Some(Category::Cat5),
            k if k >= CAT4_KT => Some(Category::Cat4),
            k if k >= CAT3_KT => Some(Category::Cat3),
            k if k >= CAT2_KT => Some(Category::Cat2),
            k if k >= CAT1_KT => Some(Category::Cat1),
            k if k >= TS_KT => Some(Category::TropicalStorm),
            _ => None,
        }
    }

    pub fn is_hurricane(&self) -> bool {
        *self >= Category::Cat1
    }
}

/// Threshold flags for one observation. `None` means the wind was unreported.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IntensityFlags {
    pub ts: Option<bool>,
    pub cat1: Option<bool>,
    pub cat2: Option<bool>,
    pub cat3: Option<bool>,
    pub cat4: Option<bool>,
    pub cat5: Option<bool>,
}

impl IntensityFlags {
    /// Negative winds are the "unreported" sentinel and count as undefined.
    pub fn from_max_wind(max_wind: Option<i32>) -> Self {
        match max_wind.filter(|kt| *kt >= 0) {
            None => Self::default(),
            Some(kt) => Self {
                ts: Some(kt >= TS_KT),
                cat1: Some(kt >= CAT1_KT),
                cat2: Some(kt >= CAT2_KT),
                cat3: Some(kt >= CAT3_KT),
                cat4: Some(kt >= CAT4_KT),
                cat5: Some(kt >= CAT5_KT),
            },
        }
    }

    /// Lowest threshold first.
    pub fn as_array(&self) -> [Option<bool>; 6] {
        [self.ts, self.cat1, self.cat2, self.cat3, self.cat4, self.cat5]
    }
}
