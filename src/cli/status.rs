use anyhow::Result;

use crate::compose::{self, Compose};
use crate::output;
use crate::paths;
use crate::registry::Registry;
use crate::status::{self, ContainerStatus, DeploymentState};

fn print_state(name: &str, state: DeploymentState) {
    let styled = match state {
        DeploymentState::Up => console::style(state.label()).green(),
        DeploymentState::Down => console::style(state.label()).red(),
        DeploymentState::Unknown => console::style(state.label()).dim(),
    };
    println!("{}: {}", console::style(name).cyan().bold(), styled);
}

/// Show the status of one deployment, coarse or per-container
pub fn run(name: &str, list_containers: bool) -> Result<()> {
    let registry = Registry::load(paths::settings_file()?)?;
    let record = super::find_record(&registry, name)?;

    let Some(manifest) = compose::locate(&record.directory) else {
        // No manifest means the state cannot be determined
        output::warning(&format!(
            "no docker-compose file found in {}",
            record.directory.display()
        ));
        print_state(name, DeploymentState::Unknown);
        return Ok(());
    };
    let compose = Compose::new(manifest);

    if !list_containers {
        let out = compose.ps_quiet()?;
        print_state(name, status::state_from_container_ids(&out));
        return Ok(());
    }

    let containers = status::container_names(&compose.ps()?);
    output::header(name);

    if containers.is_empty() {
        output::list_item("no containers found");
        return Ok(());
    }

    let now = status::now_utc();
    for container in &containers {
        // One container's bad inspect output must not hide the others
        let snapshot = compose::inspect(container)
            .and_then(|json| ContainerStatus::from_inspect_json(container, &json));
        match snapshot {
            Ok(c) => {
                output::list_item(&c.name);
                output::kv("Ports", &c.ports_display());
                output::kv("Image", &c.image);
                output::kv("Uptime", &status::format_uptime(c.uptime(now)));
            }
            Err(err) => output::warning(&format!("skipping {container}: {err:#}")),
        }
    }

    Ok(())
}
