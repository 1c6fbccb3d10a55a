//! 月長表數據
//!
//! 每年以一個整數編碼全年月長：
//!
//! - 第 4 至 15 位：自高至低依次記正月至臘月的大小，置位為大月（30 日），
//!   否則為小月（29 日）
//! - 第 0 至 3 位：閏月月序，無閏月為 0
//! - 第 16 位：閏月的大小，僅於有閏月時有意義
//!
//! 數據與通行萬年曆一致，收錄 1949 至 2100 年。

/// 表首年份。
pub const FIRST_YEAR: i32 = 1949;
/// 表末年份。
pub const LAST_YEAR: i32 = 2100;

#[rustfmt::skip]
const ENCODINGS: [u32; (LAST_YEAR - FIRST_YEAR + 1) as usize] = [
    0x0b557,                                                                                // 1949
    0x06ca0, 0x0b550, 0x15355, 0x04da0, 0x0a5b0, 0x14573, 0x052b0, 0x0a9a8, 0x0e950, 0x06aa0, // 1950
    0x0aea6, 0x0ab50, 0x04b60, 0x0aae4, 0x0a570, 0x05260, 0x0f263, 0x0d950, 0x05b57, 0x056a0, // 1960
    0x096d0, 0x04dd5, 0x04ad0, 0x0a4d0, 0x0d4d4, 0x0d250, 0x0d558, 0x0b540, 0x0b5a0, 0x195a6, // 1970
    0x095b0, 0x049b0, 0x0a974, 0x0a4b0, 0x0b27a, 0x06a50, 0x06d40, 0x0af46, 0x0ab60, 0x09570, // 1980
    0x04af5, 0x04970, 0x064b0, 0x074a3, 0x0ea50, 0x06b58, 0x05ac0, 0x0ab60, 0x096d5, 0x092e0, // 1990
    0x0c960, 0x0d954, 0x0d4a0, 0x0da50, 0x07552, 0x056a0, 0x0abb7, 0x025d0, 0x092d0, 0x0cab5, // 2000
    0x0a950, 0x0b4a0, 0x0baa4, 0x0ad50, 0x055d9, 0x04ba0, 0x0a5b0, 0x15176, 0x052b0, 0x0a930, // 2010
    0x07954, 0x06aa0, 0x0ad50, 0x05b52, 0x04b60, 0x0a6e6, 0x0a4e0, 0x0d260, 0x0ea65, 0x0d530, // 2020
    0x05aa0, 0x076a3, 0x096d0, 0x04afb, 0x04ad0, 0x0a4d0, 0x1d0b6, 0x0d250, 0x0d520, 0x0dd45, // 2030
    0x0b5a0, 0x056d0, 0x055b2, 0x049b0, 0x0a577, 0x0a4b0, 0x0aa50, 0x1b255, 0x06d20, 0x0ada0, // 2040
    0x14b63, 0x09370, 0x049f8, 0x04970, 0x064b0, 0x168a6, 0x0ea50, 0x06b20, 0x1a6c4, 0x0aae0, // 2050
    0x0a2e0, 0x0d2e3, 0x0c960, 0x0d557, 0x0d4a0, 0x0da50, 0x05d55, 0x056a0, 0x0a6d0, 0x055d4, // 2060
    0x052d0, 0x0a9b8, 0x0a950, 0x0b4a0, 0x0b6a6, 0x0ad50, 0x055a0, 0x0aba4, 0x0a5b0, 0x052b0, // 2070
    0x0b273, 0x06930, 0x07337, 0x06aa0, 0x0ad50, 0x14b55, 0x04b60, 0x0a570, 0x054e4, 0x0d160, // 2080
    0x0e968, 0x0d520, 0x0daa0, 0x16aa6, 0x056d0, 0x04ae0, 0x0a9d4, 0x0a2d0, 0x0d150, 0x0f252, // 2090
    0x0d520,                                                                                // 2100
];

/// 取得公元 `year` 年的月長編碼。
///
/// 超出表範圍的年份返回 `None`。
///
/// # 用例
///
/// ```
/// use lunarilo::chinese::table;
///
/// assert_eq!(Some(0x06ca0), table::encoding(1950));
/// assert_eq!(None, table::encoding(1948));
/// ```
pub fn encoding(year: i32) -> Option<u32> {
    (FIRST_YEAR..=LAST_YEAR)
        .contains(&year)
        .then(|| ENCODINGS[(year - FIRST_YEAR) as usize])
}

/// 取得平月的月長（日數）。
///
/// # 用例
///
/// ```
/// use lunarilo::chinese::table;
///
/// let encoding = table::encoding(2000).unwrap();
/// assert_eq!(30, table::month_days(encoding, 1));
/// assert_eq!(29, table::month_days(encoding, 3));
/// ```
///
/// # Panics
///
/// 若月序號不在 `1..=12` 間則 panic。
pub fn month_days(encoding: u32, month: u32) -> u32 {
    assert!((1..=12).contains(&month), "month {month} not in 1..=12");
    29 + ((encoding >> (16 - month)) & 1)
}

/// 取得閏月月序，無閏月為 0。
///
/// # 用例
///
/// ```
/// use lunarilo::chinese::table;
///
/// assert_eq!(7, table::leap_month(table::encoding(1949).unwrap()));
/// assert_eq!(0, table::leap_month(table::encoding(1950).unwrap()));
/// ```
pub fn leap_month(encoding: u32) -> u32 {
    encoding & 0xf
}

/// 取得閏月的月長（日數），無閏月為 0。
pub fn leap_days(encoding: u32) -> u32 {
    if leap_month(encoding) == 0 {
        0
    } else {
        29 + ((encoding >> 16) & 1)
    }
}

/// 取得全年日數，含閏月。
///
/// # 用例
///
/// ```
/// use lunarilo::chinese::table;
///
/// assert_eq!(384, table::days_in_year(table::encoding(1949).unwrap()));
/// assert_eq!(354, table::days_in_year(table::encoding(1950).unwrap()));
/// ```
pub fn days_in_year(encoding: u32) -> u32 {
    (1..=12).map(|m| month_days(encoding, m)).sum::<u32>() + leap_days(encoding)
}
