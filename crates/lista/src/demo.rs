//! The friend list walkthrough: fixed arrays first, then a growable list
//! taken through append, remove, replace and size.

use std::io::Write;

use lista_error::{Context, Result};

use lista_mem::{DynamicList, FixedList};

use lista_log::{debug, trace};

/// Writes every step's result to `out`, one line each.
pub fn run(out: &mut impl Write) -> Result<()> {
    let friend_slots = FixedList::<Option<&str>>::with_len(4, None)
        .ctx_err("failed to create friend slots")?;
    debug!("{} empty friend slots", friend_slots.size());

    let friend_pair = FixedList::from_exact(["hossan", "jahid"])
        .ctx_err("failed to create friend pair")?;
    let second = friend_pair
        .get(1)
        .ctx_err("failed to read second friend")?;
    writeln!(out, "{}", second).ctx_err("failed to write output")?;

    let mut friends = DynamicList::from(["jahid", "hossan", "roni"]);
    writeln!(out, "{}", friends).ctx_err("failed to write output")?;

    let friend = friends
        .get(1)
        .ctx_err("failed to read friend")?;
    writeln!(out, "{}", friend).ctx_err("failed to write output")?;

    friends.append("salim");
    trace!("appended, capacity {}", friends.capacity());
    writeln!(out, "{}", friends).ctx_err("failed to write output")?;

    let removed = friends
        .remove_at(1)
        .ctx_err("failed to remove friend")?;
    debug!("removed {}", removed);
    writeln!(out, "{}", friends).ctx_err("failed to write output")?;

    friends
        .set(0, "samin")
        .ctx_err("failed to replace friend")?;
    writeln!(out, "{}", friends).ctx_err("failed to write output")?;

    writeln!(out, "{}", friends.size()).ctx_err("failed to write output")?;
    Ok(())
}
