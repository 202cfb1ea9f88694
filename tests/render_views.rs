use proptest::prelude::*;
use ratatui::Terminal;
use ratatui::backend::TestBackend;

use corebars::ui::bars;
use corebars::ui::theme::Theme;

fn buffer_to_string(buf: &ratatui::buffer::Buffer) -> String {
    let area = buf.area;
    let mut out = String::new();
    for y in 0..area.height {
        for x in 0..area.width {
            let cell = buf.cell((x, y)).unwrap();
            out.push_str(cell.symbol());
        }
        if y + 1 < area.height {
            out.push('\n');
        }
    }
    out
}

fn render_to_string<F>(width: u16, height: u16, draw: F) -> String
where
    F: FnOnce(&mut ratatui::Frame),
{
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(draw).unwrap();
    let buf = terminal.backend().buffer();
    buffer_to_string(buf)
}

#[test]
fn two_core_sample_renders_expected_labels() {
    let theme = Theme::dark();
    let out = render_to_string(80, 6, |frame| {
        bars::render(frame, frame.area(), &[12.3, 99.999], &theme);
    });
    let lines: Vec<&str> = out.lines().collect();
    assert!(lines[0].contains("12.30%"));
    assert!(lines[1].contains("100.00%"));
}

proptest! {
    // Every element of a sample gets exactly one row, labeled with the value
    // to two decimals; no extra rows appear after the last core.
    #[test]
    fn every_core_gets_a_labeled_row(values in proptest::collection::vec(0.0f64..150.0, 0..16)) {
        let theme = Theme::dark();
        let out = render_to_string(80, 20, |frame| {
            bars::render(frame, frame.area(), &values, &theme);
        });
        let lines: Vec<&str> = out.lines().collect();

        for (i, value) in values.iter().enumerate() {
            let core_label = format!("core {i:>2}");
            let value_label = format!("{value:.2}%");
            prop_assert!(lines[i].contains(&core_label));
            prop_assert!(lines[i].contains(&value_label));
        }
        prop_assert_eq!(lines[values.len()].trim(), "");
    }
}
