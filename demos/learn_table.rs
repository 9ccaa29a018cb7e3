use satveg::{Filter, Satveg, SatvegError};
use std::path::Path;

fn main() -> Result<(), SatvegError> {
    let mut args = std::env::args().skip(1);
    let token = args
        .next()
        .expect("pass your SATVeg API token as the first argument");
    let path = args
        .next()
        .expect("pass a points file (label;latitude;longitude) as the second argument");

    let client = Satveg::builder()
        .token(token)
        .filter(Filter::SavitskyGolay(4))
        .build()?;

    let series = client.series_from_csv(Path::new(&path)).call()?;
    println!("{}", series.frame);

    let learn = series.to_learn()?;
    println!("{}", learn.frame);
    Ok(())
}
