use typenv_core::{EnvOptions, Shape};
use typenv_env::{Env, ReadEnv};

/// Split `KEY=SHAPE`; a bare `KEY` is checked as a string
fn parse_check(entry: &str) -> eyre::Result<(&str, Shape)> {
    let (key, shape) = match entry.split_once('=') {
        Some((key, shape)) => (key.trim(), shape.trim().parse()?),
        None => (entry.trim(), Shape::String),
    };
    if key.is_empty() {
        return Err(eyre::eyre!("missing variable name in '{entry}'"));
    }
    Ok((key, shape))
}

pub fn execute<E: ReadEnv>(env: &Env<E>, checks: &[String]) -> eyre::Result<()> {
    let mut failures = 0;

    for entry in checks {
        let (key, shape) = parse_check(entry)?;
        match env.get_with(key, EnvOptions::new().shape(shape)) {
            Ok(_) => println!("ok     {key} ({shape})"),
            Err(e) => {
                failures += 1;
                println!("FAILED {key} ({shape}): {e}");
            }
        }
    }

    if failures > 0 {
        return Err(eyre::eyre!("{failures} of {} checks failed", checks.len()));
    }
    Ok(())
}
