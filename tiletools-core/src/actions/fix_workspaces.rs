use crate::command::Command;
use crate::config::Config;
use crate::errors::Result;
use crate::ipc::WindowManager;
use crate::queries::ordered_output_names;

/// Sends every numbered workspace to the output its number belongs to. Returns how many
/// workspaces were moved.
pub async fn fix_workspaces<W: WindowManager>(wm: &W, config: &impl Config) -> Result<usize> {
    let scheme = config.numbering();
    let outputs = ordered_output_names(&wm.get_outputs().await?);
    let workspaces = wm.get_workspaces().await?;

    let moves: Vec<Command> = workspaces
        .iter()
        .filter_map(|ws| {
            let num = ws.num?;
            scheme.fix_output(num, &ws.output, &outputs)
        })
        .collect();
    for command in &moves {
        wm.execute(command.clone()).await?;
    }
    tracing::info!("Moved {} of {} workspaces", moves.len(), workspaces.len());
    Ok(moves.len())
}
