use std::iter::Peekable;

use crate::id_generator::{GroupId, IdAllocator};
use crate::stroke::Stroke;

/// Appends `incoming` to `strokes` one run of equal group ids at a time.
///
/// A run whose id is unused keeps it (and the id becomes used). A run whose id
/// collides gets one freshly allocated id for all of its strokes.
pub(super) fn merge_into(strokes: &mut Vec<Stroke>, ids: &mut IdAllocator, incoming: Vec<Stroke>) {
    strokes.reserve(incoming.len());
    let mut incoming = incoming.into_iter().peekable();

    while let Some(run_id) = incoming.peek().map(Stroke::group_id) {
        if ids.reserve(run_id) {
            strokes.extend(take_run(&mut incoming, run_id));
        } else {
            let fresh = ids.allocate();
            log::debug!("Imported group {run_id} collides, renumbered to {fresh}");
            strokes.extend(take_run(&mut incoming, run_id).map(|s| s.with_group_id(fresh)));
        }
    }
}

fn take_run<I>(incoming: &mut Peekable<I>, run_id: GroupId) -> impl Iterator<Item = Stroke> + '_
where
    I: Iterator<Item = Stroke>,
{
    std::iter::from_fn(move || incoming.next_if(|s| s.group_id() == run_id))
}
