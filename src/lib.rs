//! Utilities for converting Gregorian dates into the Chinese lunisolar
//! calendar.
//!
//! Conversion is driven by a pre-computed table of per-year lunar month
//! lengths covering 1949 through 2100. Within that span the tabulated
//! values are exact, so no astronomical computation is involved.
//!
//! # Examples
//!
//! Basic usage with [`LunarDate`]:
//!
//! ```
//! use lunarilo::LunarDate;
//!
//! let lunar = LunarDate::from_gregorian(2025, 1, 29).unwrap();
//!
//! assert_eq!("乙巳年正月初一", lunar.to_string());
//! ```
//!
//! The calendar-independent [`Date`] type carries the day arithmetic:
//!
//! ```
//! use lunarilo::chinese::Month;
//! use lunarilo::{Date, LunarDate};
//!
//! let date = Date::from_gregorian(2000, 1, 1).unwrap();
//! let lunar = LunarDate::from_date(date).unwrap();
//!
//! assert_eq!((1999, Month::Common(11), 25), (lunar.year, lunar.month, lunar.day));
//! ```
//!
//! Dates outside the table are reported, not mangled:
//!
//! ```
//! use lunarilo::LunarDate;
//!
//! assert!(LunarDate::from_gregorian(2101, 1, 1).is_err());
//! ```
//!
//! # Planned features
//!
//! - Solar terms (節氣)
//! - Years before 1949 (needs a longer table)
//! - Optional simplified-character names

pub mod chinese;
pub mod date;

pub use chinese::LunarDate;
pub use date::{Date, YearType};
