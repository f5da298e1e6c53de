//! Hand-drawn fixture tracks.
//!
//! Legend: `#` out of bounds, `.` track, `o` oil, `G` goal.

use racetrack_core::Track;

fn parse(text: &str) -> Track {
    Track::parse_ascii(text).expect("fixture track is well-formed")
}

/// Goal row over two rows of plain track.
///
/// ```text
/// GGG
/// ...
/// ...
/// ```
pub fn three_by_three() -> Track {
    parse(
        "
        GGG
        ...
        ...
        ",
    )
}

/// A single goal cell. Has no start cell, so episodes must be started
/// with an explicit position.
pub fn single_goal() -> Track {
    parse("G")
}

/// Five-wide straight with an oil cell in the middle of row 1 and walls
/// on both sides.
///
/// ```text
/// #GGG#
/// #.o.#
/// #...#
/// #...#
/// ```
pub fn oil_strip() -> Track {
    parse(
        "
        #GGG#
        #.o.#
        #...#
        #...#
        ",
    )
}

/// A long oil-free straight: useful for multi-step scripts.
///
/// ```text
/// #GGGGG#
/// #.....#   (x8)
/// ```
pub fn long_straight() -> Track {
    let mut text = String::from("#GGGGG#\n");
    for _ in 0..8 {
        text.push_str("#.....#\n");
    }
    parse(&text)
}

/// A single start cell at the bottom; every other bottom cell is a wall.
///
/// ```text
/// GGG
/// ...
/// ##.
/// ```
pub fn one_start() -> Track {
    parse(
        "
        GGG
        ...
        ##.
        ",
    )
}

/// A bottom row with no track cell at all.
pub fn no_start() -> Track {
    parse(
        "
        GGG
        ...
        #o#
        ",
    )
}

/// A wall cell between the start and a reachable track cell.
///
/// ```text
/// GGGG
/// ....
/// .#..
/// ....
/// ```
pub fn inner_wall() -> Track {
    parse(
        "
        GGGG
        ....
        .#..
        ....
        ",
    )
}
