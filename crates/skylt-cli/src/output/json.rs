use serde::Serialize;
use skylt_core::error::SkyltError;

pub fn print<T: Serialize + ?Sized>(value: &T) -> Result<(), SkyltError> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}
