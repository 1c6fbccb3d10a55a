//! 夏曆（農曆）
//!
//! Note: 為方便處理諸多術語，本模塊文檔用中文。
//!
//! 本模塊依預製月長表推算夏曆，不涉及天文計算，見 [`table`]。支持的日期
//! 自 1949 年正月初一（公曆 1949-01-29）至公曆 2100-12-31。
//!
//! 曆年以正月為首，閏月列於同名平月之後。

use std::cmp::Ordering;

use thiserror::Error;

use crate::date::Date;

pub mod fmt;
pub mod table;

/// 表首日，1949 年正月初一（公曆 1949-01-29）。
fn epoch() -> Date {
    Date::from_jdn(2432946)
}

/// 曆年，自正月初一至全年末月末日的時段。
///
/// 支持的年份取決於月長表，見 [`table`]。
///
/// # 用例
///
/// ```
/// use lunarilo::chinese::LunarYear;
///
/// let year = LunarYear::new(2017).unwrap();
///
/// assert_eq!(13, year.months.len());
/// assert_eq!(Some(6), year.leap_month());
/// ```
#[derive(Debug, Clone)]
pub struct LunarYear {
    /// 年序號（公元紀年）
    pub year: i32,
    /// 全年各月依曆序排列，閏月插於同名平月之後
    pub months: Vec<LunarMonth>,
}

/// 一個曆月的信息
#[derive(Debug, Copy, Clone)]
pub struct LunarMonth {
    /// 月名
    pub month: Month,
    /// 月首日期
    pub first_day: Date,
    /// 該月日數（29 或 30）
    pub days: u32,
}

/// 月名，`Common` 為平月，`Leap` 為閏月。
///
/// 排序時閏月緊隨同名平月之後，故 `Common(6) < Leap(6) < Common(7)`。
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Month {
    Common(u32),
    Leap(u32),
}

impl Month {
    /// 取得月序號，無論平閏。
    pub fn num(&self) -> u32 {
        use Month::*;
        *match self {
            Common(v) | Leap(v) => v,
        }
    }
    /// 閏月為 `true`，平月為 `false`
    pub fn is_leap(&self) -> bool {
        matches!(self, Self::Leap(_))
    }
    /// 取得月名的文本形式，十一、十二月稱「冬月」「臘月」。
    pub fn name(&self) -> String {
        fmt::month(*self)
    }
}

impl Ord for Month {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.num(), self.is_leap()).cmp(&(other.num(), other.is_leap()))
    }
}
impl PartialOrd for Month {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl LunarYear {
    /// 取得公元 `year` 年對應的曆年。
    ///
    /// 若月長表無該年資料則返回 `None`。
    ///
    /// # 用例
    ///
    /// ```
    /// use lunarilo::chinese::LunarYear;
    ///
    /// let year = LunarYear::new(2000).unwrap();
    /// assert_eq!("2000-02-05", year.first_day().to_string());
    ///
    /// assert!(LunarYear::new(1948).is_none());
    /// ```
    pub fn new(year: i32) -> Option<Self> {
        use Month::*;

        let encoding = table::encoding(year)?;
        let mut first_day = epoch();
        for y in table::FIRST_YEAR..year {
            first_day = first_day + table::days_in_year(table::encoding(y)?) as i32;
        }

        let leap = table::leap_month(encoding);
        let mut months = Vec::with_capacity(12 + usize::from(leap != 0));
        for m in 1..=12 {
            let days = table::month_days(encoding, m);
            months.push(LunarMonth {
                month: Common(m),
                first_day,
                days,
            });
            first_day = first_day + days as i32;
            if m == leap {
                let days = table::leap_days(encoding);
                months.push(LunarMonth {
                    month: Leap(m),
                    first_day,
                    days,
                });
                first_day = first_day + days as i32;
            }
        }

        Some(LunarYear { year, months })
    }
    /// 依特定日期取得其所在曆年。
    ///
    /// 注意公曆年首的日期多屬前一曆年。
    ///
    /// # 用例
    ///
    /// ```
    /// use lunarilo::Date;
    /// use lunarilo::chinese::LunarYear;
    ///
    /// let date = Date::from_gregorian(2000, 1, 1).unwrap();
    /// let year = LunarYear::from_date(date).unwrap();
    ///
    /// assert_eq!(1999, year.year);
    /// ```
    pub fn from_date(date: Date) -> Result<Self, Error> {
        resolve(date).map(|(year, _, _)| year)
    }

    /// 年首日期（正月初一）。
    pub fn first_day(&self) -> Date {
        self.months[0].first_day
    }
    /// 全年日數。
    ///
    /// # 用例
    ///
    /// ```
    /// use lunarilo::chinese::LunarYear;
    ///
    /// assert_eq!(384, LunarYear::new(2017).unwrap().days());
    /// assert_eq!(354, LunarYear::new(2000).unwrap().days());
    /// ```
    pub fn days(&self) -> u32 {
        self.months.iter().map(|m| m.days).sum()
    }
    /// 取得閏月月序，無閏月則返回 `None`。
    pub fn leap_month(&self) -> Option<u32> {
        self.months
            .iter()
            .find(|m| m.month.is_leap())
            .map(|m| m.month.num())
    }

    /// 取得給定日期在該年的月、日，返回格式為 `(月, 日)`。
    ///
    /// 若所給日期不在該年，則回報 `Err` 並指出該日期在該年之前還是之後。
    ///
    /// # 用例
    ///
    /// ```
    /// use lunarilo::Date;
    /// use lunarilo::chinese::{LunarYear, Month::*};
    ///
    /// let date = Date::from_gregorian(2000, 1, 1).unwrap();
    /// let year = LunarYear::from_date(date).unwrap();
    ///
    /// assert_eq!(Ok((Common(11), 25)), year.month_day_for(date));
    /// ```
    pub fn month_day_for(&self, date: Date) -> Result<(Month, u32), OtherYear> {
        let month = self
            .months
            .iter()
            .take_while(|m| m.first_day <= date)
            .last()
            .ok_or(OtherYear::Before)?;
        let day = (date - month.first_day) as u32 + 1;
        if day > month.days {
            return Err(OtherYear::After);
        }
        Ok((month.month, day))
    }
}

/// 表示給定日期不在該曆年，並指出其在前還是在後。
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum OtherYear {
    Before,
    After,
}

/// 農曆日期，依年、月、日排序。
///
/// # 用例
///
/// ```
/// use lunarilo::LunarDate;
///
/// let lunar = LunarDate::from_gregorian(2000, 1, 1).unwrap();
///
/// assert_eq!("己卯年冬月廿五", lunar.to_string());
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct LunarDate {
    /// 年序號（公元紀年）
    pub year: i32,
    /// 月名
    pub month: Month,
    /// 日序號（1..=30）
    pub day: u32,
}

impl LunarDate {
    /// 依公曆年月日轉換。
    ///
    /// 年月日不構成有效公曆日期時回報 [`Error::InvalidDate`]，日期超出
    /// 月長表範圍時回報 [`Error::YearOutOfRange`]。
    ///
    /// # 用例
    ///
    /// ```
    /// use lunarilo::LunarDate;
    /// use lunarilo::chinese::Month;
    ///
    /// let lunar = LunarDate::from_gregorian(2017, 7, 23).unwrap();
    ///
    /// assert_eq!(2017, lunar.year);
    /// assert_eq!(Month::Leap(6), lunar.month);
    /// assert_eq!(1, lunar.day);
    /// ```
    pub fn from_gregorian(year: i32, month: i32, day: i32) -> Result<Self, Error> {
        let date = Date::from_gregorian(year, month, day)
            .ok_or(Error::InvalidDate { year, month, day })?;
        Self::from_date(date)
    }

    /// 依 [`Date`] 轉換。
    ///
    /// # 用例
    ///
    /// ```
    /// use lunarilo::{Date, LunarDate};
    ///
    /// let date = Date::from_jdn(2432946); // 1949-01-29
    /// let lunar = LunarDate::from_date(date).unwrap();
    ///
    /// assert_eq!("己丑年正月初一", lunar.to_string());
    /// ```
    pub fn from_date(date: Date) -> Result<Self, Error> {
        let (year, month, day) = resolve(date)?;
        Ok(Self {
            year: year.year,
            month,
            day,
        })
    }

    /// 年名（干支）。
    pub fn year_name(&self) -> String {
        fmt::sexagenary(sexagenary_for_year(self.year))
    }
    /// 月名。
    pub fn month_name(&self) -> String {
        fmt::month(self.month)
    }
    /// 日名。
    pub fn day_name(&self) -> String {
        fmt::day(self.day)
    }
}

/// 轉換錯誤。
#[derive(Debug, Copy, Clone, Eq, PartialEq, Error)]
pub enum Error {
    /// 公曆年月日不構成有效日期。
    #[error("invalid Gregorian date {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: i32, day: i32 },
    /// 日期超出月長表範圍。
    #[error(
        "date {0} outside the supported years {first}..={last}",
        first = table::FIRST_YEAR,
        last = table::LAST_YEAR
    )]
    YearOutOfRange(Date),
}

fn resolve(date: Date) -> Result<(LunarYear, Month, u32), Error> {
    let mut y = date.gregorian().0;
    loop {
        let year = LunarYear::new(y).ok_or(Error::YearOutOfRange(date))?;
        match year.month_day_for(date) {
            Ok((month, day)) => return Ok((year, month, day)),
            Err(OtherYear::Before) => y -= 1,
            Err(OtherYear::After) => y += 1,
        }
    }
}

/// 取得所給公元年的干支序號（1..=60，甲子為 1）。
///
/// # 用例
///
/// ```
/// use lunarilo::chinese::sexagenary_for_year;
///
/// assert_eq!(1, sexagenary_for_year(1984));
/// assert_eq!(26, sexagenary_for_year(1949)); // 己丑
/// ```
pub fn sexagenary_for_year(year: i32) -> u32 {
    // 公元 4 年為甲子
    (year - 4).rem_euclid(60) as u32 + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_date() {
        assert_eq!((1949, 1, 29), epoch().gregorian());
        assert_eq!(Some(epoch()), Date::from_gregorian(1949, 1, 29));
    }

    #[test]
    fn months() {
        let year = LunarYear::new(2000).unwrap();
        let stds = [
            (1, "2000-02-05"),
            (2, "2000-03-06"),
            (3, "2000-04-05"),
            (4, "2000-05-04"),
            (5, "2000-06-02"),
            (6, "2000-07-02"),
            (7, "2000-07-31"),
            (8, "2000-08-29"),
            (9, "2000-09-28"),
            (10, "2000-10-27"),
            (11, "2000-11-26"),
            (12, "2000-12-26"),
        ];
        assert_eq!(stds.len(), year.months.len());
        for (std, month) in stds.iter().zip(&year.months) {
            assert_eq!(Month::Common(std.0), month.month);
            assert_eq!(std.1, month.first_day.iso_gregorian());
        }
        assert_eq!(None, year.leap_month());
    }

    #[test]
    fn leap_months() {
        let stds = [
            (1, "2017-01-28"),
            (2, "2017-02-26"),
            (3, "2017-03-28"),
            (4, "2017-04-26"),
            (5, "2017-05-26"),
            (6, "2017-06-24"),
            (-6, "2017-07-23"),
            (7, "2017-08-22"),
            (8, "2017-09-20"),
            (9, "2017-10-20"),
            (10, "2017-11-18"),
            (11, "2017-12-18"),
            (12, "2018-01-17"),
        ];
        let year = LunarYear::new(2017).unwrap();
        assert_eq!(stds.len(), year.months.len());
        for (std, month) in stds.iter().zip(&year.months) {
            let std_month = if std.0 > 0 {
                Month::Common(std.0 as u32)
            } else {
                Month::Leap(-std.0 as u32)
            };
            assert_eq!(
                (std_month, std.1.into()),
                (month.month, month.first_day.iso_gregorian())
            );
        }
        assert_eq!(Some(6), year.leap_month());
    }

    #[test]
    fn dates() {
        use Month::*;
        let data = [
            ((1949, 1, 29), (1949, Common(1), 1)),
            ((1950, 2, 16), (1949, Common(12), 30)),
            ((1950, 2, 17), (1950, Common(1), 1)),
            ((2000, 1, 1), (1999, Common(11), 25)),
            ((2017, 7, 22), (2017, Common(6), 29)),
            ((2017, 7, 23), (2017, Leap(6), 1)),
            ((2017, 8, 21), (2017, Leap(6), 30)),
            ((2017, 8, 22), (2017, Common(7), 1)),
            ((2100, 12, 31), (2100, Common(12), 1)),
        ];
        for ((y, m, d), (ly, lm, ld)) in data {
            let lunar = LunarDate::from_gregorian(y, m, d).unwrap();
            assert_eq!(
                (ly, lm, ld),
                (lunar.year, lunar.month, lunar.day),
                "{y:04}-{m:02}-{d:02}"
            );
        }
    }

    #[test]
    fn out_of_range() {
        for (y, m, d) in [(1949, 1, 28), (1948, 6, 1), (2101, 1, 1), (2150, 2, 10)] {
            let date = Date::from_gregorian(y, m, d).unwrap();
            assert_eq!(
                Err(Error::YearOutOfRange(date)),
                LunarDate::from_date(date),
                "{y:04}-{m:02}-{d:02}"
            );
        }
    }

    #[test]
    fn invalid_components() {
        for (y, m, d) in [(2000, 2, 30), (2000, 13, 1), (2000, 0, 1), (2021, 2, 29)] {
            assert_eq!(
                Err(Error::InvalidDate {
                    year: y,
                    month: m,
                    day: d
                }),
                LunarDate::from_gregorian(y, m, d),
                "{y:04}-{m:02}-{d:02}"
            );
        }
    }

    #[test]
    fn year_boundaries() {
        for y in table::FIRST_YEAR..table::LAST_YEAR {
            let year = LunarYear::new(y).unwrap();
            let next = LunarYear::new(y + 1).unwrap();
            assert_eq!(
                next.first_day(),
                year.first_day() + year.days() as i32,
                "{y}"
            );
            assert_eq!(Err(OtherYear::After), year.month_day_for(next.first_day()));
            let lunar = LunarDate::from_date(next.first_day()).unwrap();
            assert_eq!(
                (y + 1, Month::Common(1), 1),
                (lunar.year, lunar.month, lunar.day),
                "{y}"
            );
        }
    }

    #[test]
    fn ordering() {
        let last = Date::from_gregorian(2100, 12, 31).unwrap();
        let mut date = epoch();
        let mut prev = LunarDate::from_date(date).unwrap();
        while date < last {
            date = date + 1;
            let next = LunarDate::from_date(date).unwrap();
            assert!(prev < next, "{date}: {prev:?} !< {next:?}");
            prev = next;
        }
    }

    #[test]
    fn month_order() {
        use Month::*;
        assert!(Common(6) < Leap(6));
        assert!(Leap(6) < Common(7));
        assert!(Common(1) < Leap(1));
        assert!(Leap(1) < Common(2));
    }

    #[test]
    fn year_sexagenary() {
        for (std, year) in [(26, 1949), (60, 1983), (1, 1984), (17, 2000), (41, 2024)] {
            assert_eq!(std, sexagenary_for_year(year), "{year}");
        }
    }

    #[test]
    fn stem_branch_cycle() {
        let name = |y: i32| fmt::sexagenary(sexagenary_for_year(y));
        for year in 1949..=2040 {
            assert_eq!(name(year), name(year + 60), "{year}");
            assert_eq!(name(year)[..3], name(year + 10)[..3], "{year} stem");
            assert_eq!(name(year)[3..], name(year + 12)[3..], "{year} branch");
        }
    }
}
