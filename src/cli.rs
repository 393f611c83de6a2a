// src/cli.rs
use chrono::Local;
use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};

use crate::config::options::{LogLevel, UserType};
use crate::{log, report, scrape::SchoolSoft};

#[derive(Parser, Debug)]
#[command(name = "ss_scrape", version, about = "Fetch today's SchoolSoft schedule, lunch and preschool times as JSON")]
pub struct Args {
    /// School parameter, e.g. abcd in https://sms.schoolsoft.se/abcd/
    #[arg(short, long)]
    pub school: String,

    #[arg(short, long)]
    pub username: String,

    #[arg(short, long)]
    pub password: String,

    /// User type: 0 = teacher, 1 = student, 2 = parent
    #[arg(short = 't', long, default_value = "2")]
    pub usertype: UserType,

    /// critical, error, warn(ing), info or debug
    #[arg(short, long, default_value = "warning")]
    pub loglevel: LogLevel,
}

pub fn run() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    log::set_level(args.loglevel);
    logd!("Args: school={} user={} type={:?}", args.school, args.username, args.usertype);

    let api = SchoolSoft::new(&args.school, &args.username, &args.password, args.usertype)
        .wrap_err("could not set up HTTP client")?;
    let report = report::build(&api, &Local::now())
        .wrap_err_with(|| format!("scraping school {} failed", args.school))?;

    println!("{}", serde_json::to_string(&report)?);
    Ok(())
}
