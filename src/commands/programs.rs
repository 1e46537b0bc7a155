use crate::{
    libs::{config::Config, messages::Message, view::View},
    msg_print,
};
use anyhow::Result;

pub fn cmd() -> Result<()> {
    let config = Config::read()?;

    msg_print!(Message::DegreeProgramsHeader, true);
    View::degree_programs(&config);
    Ok(())
}
