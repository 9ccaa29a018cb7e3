use satveg::{LatLon, Point, Satveg, SatvegError};

fn main() -> Result<(), SatvegError> {
    let token = std::env::args()
        .nth(1)
        .expect("pass your SATVeg API token as the first argument");

    let client = Satveg::builder().token(token).build()?;

    let series = client.series(&[
        Point::labeled(LatLon(-15.079, -48.958), "cerrado"),
        Point::labeled(LatLon(-22.655, -47.168), "sugarcane"),
    ])?;
    println!("{}", series.frame);
    Ok(())
}
