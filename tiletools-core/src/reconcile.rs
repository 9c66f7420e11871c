//! Keeps workspace numbers and outputs consistent with the numbering scheme: workspace `n`
//! lives on output `(n - 1) / slots_per_output`, outputs ordered left to right.
use crate::command::Command;
use crate::errors::{Result, TileError};
use std::collections::HashSet;

pub const DEFAULT_SLOTS_PER_OUTPUT: i32 = 10;

/// How many workspace numbers each output owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberingScheme {
    slots_per_output: i32,
}

impl Default for NumberingScheme {
    fn default() -> Self {
        Self::new(DEFAULT_SLOTS_PER_OUTPUT)
    }
}

impl NumberingScheme {
    /// Non positive slot widths fall back to [`DEFAULT_SLOTS_PER_OUTPUT`].
    #[must_use]
    pub fn new(slots_per_output: i32) -> Self {
        let slots_per_output = if slots_per_output > 0 {
            slots_per_output
        } else {
            tracing::warn!(
                "Invalid slots per output {slots_per_output}, using {DEFAULT_SLOTS_PER_OUTPUT}"
            );
            DEFAULT_SLOTS_PER_OUTPUT
        };
        Self { slots_per_output }
    }

    #[must_use]
    pub const fn slots_per_output(&self) -> i32 {
        self.slots_per_output
    }

    /// Highest workspace number addressable with `output_count` outputs.
    #[must_use]
    pub fn max_workspace(&self, output_count: usize) -> i32 {
        i32::try_from(output_count)
            .unwrap_or(i32::MAX)
            .saturating_mul(self.slots_per_output)
    }

    /// Index of the output workspace `num` belongs to. Workspace 0 shares the first output
    /// with 1..=S; negative numbers have no slot.
    #[must_use]
    pub fn output_index(&self, num: i32) -> Option<usize> {
        if num < 0 {
            return None;
        }
        usize::try_from(((num - 1) / self.slots_per_output).max(0)).ok()
    }

    /// Name of the output workspace `num` belongs to. Numbers without a slot go to the first
    /// output.
    ///
    /// # Errors
    ///
    /// Returns [`TileError::IndexOutOfRange`] if `names` has no entry for the slot.
    pub fn output_for<'a, S: AsRef<str>>(&self, num: i32, names: &'a [S]) -> Result<&'a str> {
        let index = self.output_index(num).unwrap_or(0);
        names
            .get(index)
            .map(AsRef::as_ref)
            .ok_or(TileError::IndexOutOfRange {
                num,
                index,
                available: names.len(),
            })
    }

    /// Finds a free number for a workspace numbered beyond the known outputs.
    ///
    /// Returns `Ok(None)` when `current` is already addressable. Otherwise the search starts
    /// on the last output, at the slot sharing `current`'s last digit, and walks outwards
    /// (`base`, `base + 1`, `base - 1`, ...) to the first number in `1..=max` not taken.
    ///
    /// # Errors
    ///
    /// Returns [`TileError::NoFreeSlot`] when every number in `1..=max` is taken.
    pub fn fix_number(
        &self,
        current: i32,
        output_count: usize,
        existing: &HashSet<i32>,
    ) -> Result<Option<i32>> {
        let max = self.max_workspace(output_count);
        tracing::debug!("Max workspace is {max}");
        if current <= max {
            return Ok(None);
        }

        let base = max - self.slots_per_output + current % self.slots_per_output;
        let is_free = |num: i32| num > 0 && num <= max && !existing.contains(&num);
        for offset in 0..=max {
            if let Some(num) = [base + offset, base - offset].into_iter().find(|&n| is_free(n)) {
                tracing::debug!("Moving workspace {current} to {num}");
                return Ok(Some(num));
            }
        }
        Err(TileError::NoFreeSlot { max })
    }

    /// Proposes moving workspace `target_num` to the output its number belongs to.
    ///
    /// # Errors
    ///
    /// Returns [`TileError::IndexOutOfRange`] if fewer outputs are known than the number
    /// requires.
    pub fn try_fix_output<S: AsRef<str>>(
        &self,
        target_num: i32,
        current_output: &str,
        ordered_output_names: &[S],
    ) -> Result<Option<Command>> {
        let Some(index) = self.output_index(target_num) else {
            tracing::debug!("Workspace {target_num} has no numbered slot");
            return Ok(None);
        };
        let computed_output = ordered_output_names
            .get(index)
            .ok_or(TileError::IndexOutOfRange {
                num: target_num,
                index,
                available: ordered_output_names.len(),
            })?
            .as_ref();

        if current_output == computed_output {
            return Ok(None);
        }
        tracing::debug!("Moving workspace {target_num} from {current_output} to {computed_output}");
        Ok(Some(Command::MoveWorkspaceToOutput {
            workspace: Some(target_num),
            output: computed_output.to_owned(),
        }))
    }

    /// [`Self::try_fix_output`] with out of range numbers logged and ignored.
    #[must_use]
    pub fn fix_output<S: AsRef<str>>(
        &self,
        target_num: i32,
        current_output: &str,
        ordered_output_names: &[S],
    ) -> Option<Command> {
        self.try_fix_output(target_num, current_output, ordered_output_names)
            .unwrap_or_else(|err| {
                tracing::warn!("{err}");
                None
            })
    }
}

/// [`NumberingScheme::fix_number`] with the default scheme.
///
/// # Errors
///
/// See [`NumberingScheme::fix_number`].
pub fn fix_number(current: i32, output_count: usize, existing: &HashSet<i32>) -> Result<Option<i32>> {
    NumberingScheme::default().fix_number(current, output_count, existing)
}

/// [`NumberingScheme::fix_output`] with the default scheme.
#[must_use]
pub fn fix_output<S: AsRef<str>>(
    target_num: i32,
    current_output: &str,
    ordered_output_names: &[S],
) -> Option<Command> {
    NumberingScheme::default().fix_output(target_num, current_output, ordered_output_names)
}
