//! Apply the listing filters and sort order.
//!
//! Both selectors accept "All" (the default) to leave that column unfiltered.

use super::show_students;
use crate::{
    db::students::Students,
    libs::{
        messages::Message,
        student::{SortKey, StudentFilter},
        validation::{degree_filter, validate_year_filter, FILTER_ALL},
    },
    msg_error,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct FilterArgs {
    /// Year level to show, 1 to 4, or All
    #[arg(short, long, default_value = FILTER_ALL)]
    pub year: String,
    /// Degree program to show, or All
    #[arg(short, long, default_value = FILTER_ALL)]
    pub degree: String,
    /// Column to sort by
    #[arg(short, long, value_enum)]
    pub sort: Option<SortKey>,
}

pub fn cmd(args: FilterArgs) -> Result<()> {
    let year_level = match validate_year_filter(&args.year) {
        Ok(year_level) => year_level,
        Err(error) => {
            msg_error!(Message::InvalidInput(error.to_string()));
            return Ok(());
        }
    };

    let filter = StudentFilter {
        year_level,
        degree_program: degree_filter(&args.degree),
    };

    let mut students = Students::open_default()?;
    let found = students.query(&filter, args.sort)?;
    show_students(&found);

    students.close()?;
    Ok(())
}
