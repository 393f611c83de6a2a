// src/config/consts.rs

// Net config
pub const PORTAL_BASE: &str = "https://sms.schoolsoft.se";
pub const USER_AGENT: &str = concat!("ss_scrape/", env!("CARGO_PKG_VERSION"));
pub const REQUEST_TIMEOUT_SECS: u64 = 15;

// Login redirect: https://sms<N>.schoolsoft.se/<school>/html/redirect_login.htm
pub const LOGIN_REDIRECT_TMPL: &str = r"^https://sms(\d*)\.schoolsoft\.se/{school}/html/redirect_login\.htm";
pub const LOGIN_ATTEMPTS: u32 = 1;

// Pages (relative to /<school>/)
pub const PAGE_LOGIN: &str = "jsp/Login.jsp";

// Schedule grid
pub const GRID_MARGIN: usize = 15;
// Largest spans HTML allows; anything bigger is taken as the limit
pub const MAX_COLSPAN: usize = 1000;
pub const MAX_ROWSPAN: usize = 65534;

// Lunch: more entries than school days means two dishes per day
pub const LUNCH_SINGLE_MAX: usize = 5;

// Report
pub const REPORT_ICON: &str = "mdi:school";
pub const EVENING_HOUR: u32 = 16; // after this, report on tomorrow
pub const DAY_NAMES_SV: [&str; 7] = ["Måndag", "Tisdag", "Onsdag", "Torsdag", "Fredag", "Lördag", "Söndag"];
