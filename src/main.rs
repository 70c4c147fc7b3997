use std::io::{self, BufRead};

use elevated::{bmi,
               bmi::HealthStatus,
               config::Config,
               logger,
               prelude::*,
               AnyError,
               Exceptional};

fn read(lines: &mut impl Iterator<Item = io::Result<String>>,
        what: &str)
        -> Exceptional<f64> {
  println!("Enter your {}", what);

  let line = lines.next().unwrap_or_else(|| {
                           Err(io::Error::new(io::ErrorKind::UnexpectedEof,
                                              "stdin closed"))
                         });

  Exceptional::from(line).bind(|l| {
                           Exceptional::attempt(|| l.trim().parse::<f64>())
                         })
}

fn write(status: HealthStatus) {
  println!("Your health status: {}", status);
}

fn main() -> Result<(), AnyError> {
  let config = Config::from_env().norm()?;
  logger::init(&config).norm()?;

  let stdin = io::stdin();
  let mut lines = stdin.lock().lines();

  bmi::try_run(|what| read(&mut lines, what), write)
    .tap_err(|e| log::error!("{:#?}", e))
    .into_result()
    .norm()
    .map(|_| ())
}
