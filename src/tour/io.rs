use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::Path,
};

use crate::{error::Result, tour::Tour};

pub fn read_tour<P: AsRef<Path>>(path: P) -> Result<Tour> {
    let f = File::open(path)?;
    let rdr = BufReader::new(f);

    let tour: Tour = serde_json::from_reader(rdr)?;
    tour.validate()?;

    Ok(tour)
}

pub fn write_tour<P: AsRef<Path>>(path: P, tour: &Tour) -> Result<()> {
    let f = File::create(path)?;
    let mut wtr = BufWriter::new(f);

    serde_json::to_writer_pretty(&mut wtr, tour)?;
    wtr.flush()?;

    Ok(())
}
