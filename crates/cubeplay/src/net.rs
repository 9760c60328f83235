use cubeplay_core::{Face, FaceletState};
use cubeprefs::ColorScheme;
use owo_colors::OwoColorize;

/// Renders the cube as an unfolded net of colored cells, with U above F and D
/// below it.
pub(crate) fn render_net(state: &FaceletState, colors: &ColorScheme) -> String {
    let cell = |face: Face, i: usize| {
        let color = state[face][i];
        let [r, g, b] = colors[color].rgb;
        format!(" {} ", color.letter())
            .black()
            .on_truecolor(r, g, b)
            .to_string()
    };
    let row = |face: Face, r: usize| (0..3).map(|c| cell(face, r * 3 + c)).collect::<String>();
    let indent = " ".repeat(9);

    let top = (0..3).map(|r| format!("{indent}{}", row(Face::U, r)));
    let middle = (0..3).map(|r| {
        [Face::L, Face::F, Face::R, Face::B]
            .map(|face| row(face, r))
            .concat()
    });
    let bottom = (0..3).map(|r| format!("{indent}{}", row(Face::D, r)));
    top.chain(middle).chain(bottom).collect::<Vec<_>>().join("\n")
}

#[cfg(test)]
mod tests {
    use cubeplay_core::Twist;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_render_net() {
        let mut state = FaceletState::solved();
        state.apply_twist("R".parse::<Twist>().unwrap());
        let net = render_net(&state, &ColorScheme::default());
        assert_eq!(net.lines().count(), 9);
        for letter in ['W', 'Y', 'G', 'B', 'O', 'R'] {
            let cells = net.matches(&format!(" {letter} ")).count();
            assert_eq!(cells, 9, "{letter}");
        }
    }
}
