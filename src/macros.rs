// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!
    () => {
        ::std::string::String::new()
    };
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

#[macro_export]
macro_rules! portal_url {
    // portal_url!(school, "jsp/student/page.jsp?student={}", id)
    // → https://sms.schoolsoft.se/<school>/jsp/student/page.jsp?student=<id>
    ($school:expr, $path:literal $(, $arg:expr)* $(,)?) => {
        ::std::format!(
            "{}/{}/{}",
            $crate::config::consts::PORTAL_BASE,
            $school,
            ::std::format!($path $(, $arg)*),
        )
    };
}
