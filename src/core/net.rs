// src/core/net.rs

// Blocking HTTPS with a shared cookie jar. Logs in lazily: the first page that
// bounces to the login redirect triggers a login POST and one retry.

use std::{sync::Arc, time::Duration};

use regex::Regex;
use reqwest::{
    blocking::Client,
    cookie::Jar,
    redirect::Policy,
};

use crate::config::consts::{LOGIN_ATTEMPTS, LOGIN_REDIRECT_TMPL, PAGE_LOGIN, REQUEST_TIMEOUT_SECS, USER_AGENT};
use crate::config::options::Credentials;
use crate::error::{Result, ScrapeError};

pub struct Session {
    school: String,
    credentials: Credentials,
    client: Client,
    // Same jar, but redirects are left alone so the login response's cookies are kept as-is
    login_client: Client,
    login_redirect: Regex,
}

impl Session {
    pub fn new(school: &str, credentials: Credentials) -> Result<Self> {
        let jar = Arc::new(Jar::default());
        let timeout = Duration::from_secs(REQUEST_TIMEOUT_SECS);

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .cookie_provider(Arc::clone(&jar))
            .build()?;
        let login_client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .cookie_provider(jar)
            .redirect(Policy::none())
            .build()?;

        Ok(Self {
            school: s!(school),
            credentials,
            client,
            login_client,
            login_redirect: login_redirect_pattern(school),
        })
    }

    pub fn school(&self) -> &str {
        &self.school
    }

    /// GET `url` as the logged-in user and return the body.
    pub fn try_get(&self, url: &str) -> Result<String> {
        let mut attempts = 0;
        loop {
            logd!("Try get: {url}");
            let resp = self.client.get(url).send()?;

            if let Some(server) = login_server(&self.login_redirect, resp.url().as_str()) {
                logd!("Server number: {server:?}");
                if attempts >= LOGIN_ATTEMPTS {
                    loge!("Invalid username or password");
                    return Err(ScrapeError::AuthFailure);
                }
                self.login()?;
                attempts += 1;
                continue;
            }

            let status = resp.status();
            if !status.is_success() {
                return Err(ScrapeError::Status { status: status.as_u16(), url: s!(url) });
            }
            logd!("SchoolSoft logged in");
            return Ok(resp.text()?);
        }
    }

    fn login(&self) -> Result<()> {
        let usertype = self.credentials.usertype.code().to_string();
        let form = [
            ("action", "login"),
            ("usertype", usertype.as_str()),
            ("ssusername", self.credentials.username.as_str()),
            ("sspassword", self.credentials.password.as_str()),
        ];
        let url = portal_url!(&self.school, "{}", PAGE_LOGIN);
        logf!("Logging in as {} ({:?})", self.credentials.username, self.credentials.usertype);

        let resp = self.login_client.post(&url).form(&form).send()?;
        let status = resp.status();
        if !(status.is_success() || status.is_redirection()) {
            return Err(ScrapeError::Status { status: status.as_u16(), url });
        }
        logd!("Save cookie in memory");
        Ok(())
    }
}

/* ---------- helpers ---------- */

fn login_redirect_pattern(school: &str) -> Regex {
    let pat = LOGIN_REDIRECT_TMPL.replace("{school}", &regex::escape(school));
    Regex::new(&pat).expect("login redirect pattern with escaped school code")
}

/// Server number (possibly empty) when `url` is the login redirect page.
fn login_server(pattern: &Regex, url: &str) -> Option<String> {
    pattern.captures(url).map(|c| s!(c.get(1).map_or("", |m| m.as_str())))
}
