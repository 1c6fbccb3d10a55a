//! 格式化日期相關功能

use std::fmt;

use super::{LunarDate, Month};

/// 漢數字，第 `1..=9` 項分別為「一」到「九」。為便於組合日名，第 0 項為「十」。
pub const NUMERALS: &[&str] = &["十", "一", "二", "三", "四", "五", "六", "七", "八", "九"];

/// 天干，甲居首。
const STEMS: [&str; 10] = ["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];
/// 地支，子居首。
const BRANCHES: [&str; 12] = [
    "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
];

/// 干支序號轉為文本形式，序號自 1（甲子）至 60（癸亥）。
///
/// # 用例
///
/// ```
/// use lunarilo::chinese::fmt;
///
/// assert_eq!("甲子", fmt::sexagenary(1));
/// assert_eq!("乙巳", fmt::sexagenary(42));
/// ```
pub fn sexagenary(num: u32) -> String {
    let i = ((num + 59) % 60) as usize;
    STEMS[i % 10].to_owned() + BRANCHES[i % 12]
}

/// 取得月名（含「月」字）。十一、十二月稱「冬月」「臘月」，閏月冠「閏」字。
///
/// # 用例
///
/// ```
/// use lunarilo::chinese::{fmt, Month::*};
///
/// assert_eq!("冬月", fmt::month(Common(11)));
/// assert_eq!("閏正月", fmt::month(Leap(1)));
/// ```
///
/// # Panics
///
/// 若月序號不在 `1..=12` 間則 panic。
pub fn month(m: Month) -> String {
    let num = m.num();
    let mut name = String::new();
    if m.is_leap() {
        name.push('閏');
    }
    name.push_str(match num {
        1 => "正",
        2..=9 => NUMERALS[num as usize],
        10 => "十",
        11 => "冬",
        12 => "臘",
        _ => panic!("month {num} not in 1..=12"),
    });
    name.push('月');
    name
}

/// 取得日名，前十日為「初一」到「初十」，第 21 至 29 日為「廿一」到「廿九」。
///
/// # 用例
///
/// ```
/// use lunarilo::chinese::fmt;
///
/// assert_eq!("初十", fmt::day(10));
/// assert_eq!("廿五", fmt::day(25));
/// assert_eq!("三十", fmt::day(30));
/// ```
///
/// # Panics
///
/// 若日序號不在 `1..=30` 間則 panic。
pub fn day(d: u32) -> String {
    let tens = match d {
        1..=10 => "初",
        11..=19 => "十",
        20 => "二",
        21..=29 => "廿",
        30 => "三",
        _ => panic!("day {d} not in 1..=30"),
    };
    tens.to_owned() + NUMERALS[(d % 10) as usize]
}

impl fmt::Display for LunarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}年{}{}",
            self.year_name(),
            self.month_name(),
            self.day_name()
        )
    }
}
