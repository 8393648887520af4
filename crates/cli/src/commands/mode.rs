use typenv_env::{Env, ReadEnv};

pub fn execute<E: ReadEnv>(env: &Env<E>, name: Option<&str>) -> eyre::Result<()> {
    let key = &env.config().mode_key;
    let current = env.mode();

    match (name, current) {
        (None, Some(mode)) => {
            println!("{mode}");
            Ok(())
        }
        (None, None) => Err(eyre::eyre!("{key} is not set")),
        (Some(name), _) if env.is(name) => {
            println!("{name}");
            Ok(())
        }
        (Some(name), Some(mode)) => Err(eyre::eyre!("{key} is '{mode}', not '{name}'")),
        (Some(name), None) => Err(eyre::eyre!("{key} is not set, expected '{name}'")),
    }
}
