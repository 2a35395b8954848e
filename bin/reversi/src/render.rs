use colored::*;
use qrv_board::Color;
use qrv_session::*;

/// Draws a snapshot as a lettered grid with a status line underneath.
///
/// Pure stones show as X or O, mixed squares as their black percentage,
/// hints as a dot.
pub fn board(snapshot: &Snapshot) -> String {
    let header = (0..snapshot.side)
        .map(|x| format!("{:>3}", (b'a' + x as u8) as char))
        .collect::<String>();
    let rows = (0..snapshot.side)
        .map(|y| {
            let cells = (0..snapshot.side)
                .filter_map(|x| snapshot.at(x, y))
                .map(|shade| format!(" {}", shade_str(shade)))
                .collect::<String>();
            format!("{:>2}{}", y + 1, cells)
        })
        .collect::<Vec<String>>()
        .join("\n");
    format!(
        "\n  {}\n{}\n{} | {} | turn {} | {} realizations",
        header,
        rows,
        snapshot.status.to_string().as_str().bold(),
        snapshot.score,
        snapshot.turn,
        snapshot.population,
    )
}

fn shade_str(shade: Shade) -> ColoredString {
    match shade {
        Shade::Hint => " ·".yellow(),
        Shade::Vacant => "  ".normal(),
        Shade::Stone(tone) => {
            let text = tone.to_string();
            match (tone, tone.side()) {
                (Tone::Black, _) => text.as_str().bright_white().bold(),
                (Tone::White, _) => text.as_str().bright_black().bold(),
                (_, Some(Color::Black)) => text.as_str().white(),
                (_, Some(Color::White)) => text.as_str().bright_black(),
                (_, None) => text.as_str().magenta(),
            }
        }
    }
}
