use super::target::{resolve_target, WorkspaceTarget};
use crate::command::Command;
use crate::config::Config;
use crate::errors::Result;
use crate::ipc::WindowManager;
use crate::queries::{focused_workspace_num, ordered_output_names, other_workspace_num};
use crate::reconcile::NumberingScheme;

/// Focuses the target workspace, keeping every output on a workspace of its own slots.
pub async fn focus_workspace<W: WindowManager>(
    wm: &W,
    config: &impl Config,
    target: &WorkspaceTarget,
) -> Result<()> {
    let target = resolve_target(wm, target).await?;
    let outputs = ordered_output_names(&wm.get_outputs().await?);
    let workspaces = wm.get_workspaces().await?;
    let current = focused_workspace_num(&workspaces).unwrap_or(1);
    let other = other_workspace_num(&workspaces).unwrap_or(current);
    tracing::debug!(current, other, target, "Focusing workspace");

    for command in plan_focus_workspace(config.numbering(), target, current, other, &outputs)? {
        wm.execute(command).await?;
    }
    Ok(())
}

/// Commands taking the focus from `current` to `target` while `other` is shown on another
/// output. Each command is meant to be sent on its own.
///
/// # Errors
///
/// Fails if `other`'s slot has no output in `ordered_output_names`.
pub fn plan_focus_workspace<S: AsRef<str>>(
    scheme: NumberingScheme,
    target: i32,
    current: i32,
    other: i32,
    ordered_output_names: &[S],
) -> Result<Vec<Command>> {
    let workspace = |num| Command::Workspace {
        num,
        auto_back_and_forth: false,
    };

    if current == other {
        tracing::debug!("Only workspace {current} is visible");
        return Ok(vec![Command::Workspace {
            num: target,
            auto_back_and_forth: true,
        }]);
    }
    if target == other {
        tracing::debug!("Swapping focus of workspaces {current} and {other}");
        return Ok(vec![workspace(target)]);
    }
    if target == current {
        return Ok(vec![Command::WorkspaceBackAndForth]);
    }

    if scheme.output_index(current) == scheme.output_index(target) {
        return Ok(vec![workspace(target)]);
    }
    // Show the target on its own output, then bring the old workspace back in front.
    let other_output = scheme.output_for(other, ordered_output_names)?;
    Ok(vec![
        workspace(other),
        Command::FocusOutput(other_output.to_owned()),
        workspace(target),
        workspace(current),
        workspace(target),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::test::two_outputs;
    use crate::config::TestConfig;
    use crate::errors::TileError;
    use crate::ipc::MockWindowManager;

    const OUTPUTS: [&str; 2] = ["eDP-1", "HDMI-1"];

    fn plan(target: i32, current: i32, other: i32) -> Vec<String> {
        plan_focus_workspace(NumberingScheme::default(), target, current, other, &OUTPUTS)
            .unwrap()
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    #[test]
    fn single_visible_workspace_uses_plain_switch() {
        assert_eq!(plan(3, 1, 1), vec!["workspace 3"]);
    }

    #[test]
    fn other_visible_workspace_is_focused_directly() {
        assert_eq!(plan(11, 1, 11), vec!["workspace --no-auto-back-and-forth 11"]);
    }

    #[test]
    fn current_workspace_goes_back_and_forth() {
        assert_eq!(plan(1, 1, 11), vec!["workspace back_and_forth"]);
    }

    #[test]
    fn same_output_switches_in_place() {
        assert_eq!(plan(4, 1, 11), vec!["workspace --no-auto-back-and-forth 4"]);
    }

    #[test]
    fn workspace_zero_shares_the_first_output() {
        assert_eq!(plan(0, 1, 11), vec!["workspace --no-auto-back-and-forth 0"]);
    }

    #[test]
    fn other_output_is_switched_behind_the_current_one() {
        assert_eq!(
            plan(12, 1, 11),
            vec![
                "workspace --no-auto-back-and-forth 11",
                "focus output \"HDMI-1\"",
                "workspace --no-auto-back-and-forth 12",
                "workspace --no-auto-back-and-forth 1",
                "workspace --no-auto-back-and-forth 12",
            ]
        );
    }

    #[test]
    fn other_beyond_known_outputs_is_an_error() {
        let err = plan_focus_workspace(NumberingScheme::default(), 12, 1, 25, &OUTPUTS).unwrap_err();
        assert!(matches!(err, TileError::IndexOutOfRange { num: 25, .. }));
    }

    #[tokio::test]
    async fn sends_each_command_on_its_own() {
        let wm = MockWindowManager::new(two_outputs());
        focus_workspace(&wm, &TestConfig::default(), &WorkspaceTarget::Number(13))
            .await
            .unwrap();
        assert_eq!(wm.executed().len(), 5);
        assert_eq!(wm.executed()[1], "focus output \"HDMI-1\"");
    }
}
