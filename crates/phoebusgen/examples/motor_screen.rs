use phoebusgen::{
    ActionButton, BackgroundColor, Config, Definitions, FontProperty, ForegroundColor,
    Formatting, Label, Screen, TextEntry, TextUpdate, Transparent, Widget,
};
use std::env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Picks up PHOEBUSGEN_COLOR_DEF / PHOEBUSGEN_FONT_DEF or ~/.phoebusgen/ if present.
    let defs = Definitions::load(&Config::discover())?;
    let output = env::args().nth(1).unwrap_or_else(|| "motor.bob".to_string());

    let mut title = Label::new("Title", "Motor $(M)", 0, 0, 400, 40);
    title
        .font(defs.font("Header 2")?)
        .foreground_color(defs.color("Header_ForeGround")?)
        .background_color(defs.color("Header_Background")?)
        .transparent(false);

    let mut readback = TextUpdate::new("Readback", "$(P)$(M).RBV", 10, 50, 120, 20);
    readback.precision(3).show_units(true);

    let mut setpoint = TextEntry::new("Setpoint", "$(P)$(M).VAL", 140, 50, 120, 20);
    setpoint.background_color(defs.color("Write_Background")?);

    let mut stop = ActionButton::new("Stop", "STOP", "", 270, 45, 120, 30);
    stop.background_color(defs.color("STOP")?)
        .action_write_pv("$(P)$(M).STOP", "1", Some("Stop motor"));

    let mut screen = Screen::new("Motor");
    screen
        .width(400)
        .height(100)
        .add_macro("P", "SYS:")?
        .add_macro("M", "m1")?;
    screen.add_widget(title);
    screen.add_widget(readback);
    screen.add_widget(setpoint);
    screen.add_widget(stop);

    screen.write_screen(&output)?;
    println!("Wrote {}", output);
    Ok(())
}
