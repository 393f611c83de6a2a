// src/scrape.rs
use chrono::Local;

use crate::{
    config::options::{Credentials, UserType},
    core::net::Session,
    error::Result,
    schedule::DaySchedule,
    specs::{
        self,
        lunch::LunchDay,
        preschool::DayTimes,
        students::Student,
    },
};

/// What the report needs from the portal. `SchoolSoft` is the real one.
pub trait Portal {
    fn fetch_students(&self) -> Result<Vec<Student>>;

    /// Opens the student's start page. The portal keeps a "current student"
    /// per session; this carries no data of its own.
    fn fetch_info(&self, student: &str) -> Result<()>;

    fn fetch_lunch_menu(&self, student: &str) -> Result<Vec<LunchDay>>;
    fn fetch_schedule(&self, student: &str) -> Result<Vec<DaySchedule>>;
    fn fetch_preschool_schedule(&self, student: &str) -> Result<Vec<DayTimes>>;
}

/// Logged-in client for one school.
pub struct SchoolSoft {
    session: Session,
}

impl SchoolSoft {
    pub fn new(school: &str, username: &str, password: &str, usertype: UserType) -> Result<Self> {
        let credentials = Credentials { username: s!(username), password: s!(password), usertype };
        Ok(Self { session: Session::new(school, credentials)? })
    }

    pub fn school(&self) -> &str {
        self.session.school()
    }

    /// Raw page body, logging in first if needed. For pages without a parser.
    pub fn try_get(&self, url: &str) -> Result<String> {
        self.session.try_get(url)
    }
}

impl Portal for SchoolSoft {
    fn fetch_students(&self) -> Result<Vec<Student>> {
        let url = portal_url!(self.school(), "jsp/student/right_parent_pwdadmin.jsp");
        let doc = self.try_get(&url)?;
        Ok(specs::students::parse(&doc))
    }

    fn fetch_info(&self, student: &str) -> Result<()> {
        let url = portal_url!(self.school(), "jsp/student/top_student.jsp?student={}", student);
        self.try_get(&url)?;
        Ok(())
    }

    fn fetch_lunch_menu(&self, student: &str) -> Result<Vec<LunchDay>> {
        let url = portal_url!(
            self.school(),
            "jsp/student/right_student_lunchmenu.jsp?menu=lunchmenu&student={}",
            student
        );
        let doc = self.try_get(&url)?;
        Ok(specs::lunch::parse(&doc))
    }

    fn fetch_schedule(&self, student: &str) -> Result<Vec<DaySchedule>> {
        let url = portal_url!(
            self.school(),
            "jsp/student/right_student_schedule.jsp?menu=schedule&student={}",
            student
        );
        let doc = self.try_get(&url)?;
        specs::schedule::parse(&doc)
    }

    fn fetch_preschool_schedule(&self, student: &str) -> Result<Vec<DayTimes>> {
        let url = portal_url!(
            self.school(),
            "jsp/student/right_parent_preschool_schedule_new.jsp?student={}&fromdate={}",
            student,
            Local::now().format("%Y-%m-%d")
        );
        let doc = self.try_get(&url)?;
        specs::preschool::parse(&doc)
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn portal_urls() {
        assert_eq!(
            portal_url!("abcd", "jsp/student/top_student.jsp?student={}", "42"),
            "https://sms.schoolsoft.se/abcd/jsp/student/top_student.jsp?student=42"
        );
        assert_eq!(
            portal_url!("abcd", "jsp/Login.jsp"),
            "https://sms.schoolsoft.se/abcd/jsp/Login.jsp"
        );
    }
}
