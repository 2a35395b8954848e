use dialoguer::Input;
use qrv_board::Color;
use qrv_board::Square;

/// Asks `color` for a square in a1..f6 notation. `None` means the player quit.
pub fn square(color: Color) -> anyhow::Result<Option<Square>> {
    let line = Input::<String>::new()
        .with_prompt(format!("{} to move (q to quit)", color.label()))
        .report(false)
        .validate_with(|i: &String| -> Result<(), String> {
            match i.trim() {
                "q" | "quit" => Ok(()),
                s => Square::try_from(s).map(|_| ()).map_err(|e| e.to_string()),
            }
        })
        .interact_text()?;
    match line.trim() {
        "q" | "quit" => Ok(None),
        s => Square::try_from(s).map(Some),
    }
}
