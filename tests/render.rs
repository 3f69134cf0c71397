mod common;

use checkerboard::{render_board, BoardConfig, BoardError, Color, Palette};
use common::{at, cursor_color, random_palette};
use rand::{rngs::StdRng, Rng, SeedableRng};

const TRIALS: usize = 200;

#[test]
fn reference_board() {
    let config = BoardConfig::default();
    let cells = config.render();
    assert_eq!(cells.len(), 100);

    let row3: Vec<Color> = (0..10).map(|c| at(&cells, 10, 3, c).color).collect();
    assert_eq!(
        row3,
        [
            Color::RED,
            Color::BLACK,
            Color::GREEN,
            Color::BLACK,
            Color::RED,
            Color::BLACK,
            Color::RED,
            Color::BLACK,
            Color::RED,
            Color::BLACK,
        ]
    );
    assert_eq!(cells.iter().filter(|c| c.color == Color::GREEN).count(), 1);
}

#[test]
fn random_boards_hold_alternation_and_highlight() {
    let mut rng = StdRng::seed_from_u64(0x00c0_ffee);

    for _ in 0..TRIALS {
        let rows = rng.gen_range(1..=24);
        let columns = rng.gen_range(1..=24);
        let palette = random_palette(&mut rng);
        // sometimes outside the grid
        let highlight_at = (rng.gen_range(0..rows + 2), rng.gen_range(0..columns + 2));

        let cells = render_board(rows, columns, &palette, highlight_at).unwrap();
        assert_eq!(cells.len(), rows * columns);

        for (index, cell) in cells.iter().enumerate() {
            assert_eq!((cell.row, cell.column), (index / columns, index % columns));

            if (cell.row, cell.column) == highlight_at {
                assert_eq!(cell.color, palette.highlight);
            } else {
                assert_eq!(cell.color, cursor_color(&palette, cell.row, cell.column));
            }
        }

        let in_range = highlight_at.0 < rows && highlight_at.1 < columns;
        let highlighted = cells.iter().filter(|c| c.color == palette.highlight).count();
        assert_eq!(highlighted, usize::from(in_range));
    }
}

#[test]
fn rows_alternate_around_highlight() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..TRIALS {
        let rows = rng.gen_range(1..=16);
        let columns = rng.gen_range(2..=16);
        let palette = random_palette(&mut rng);
        let highlight_at = (rng.gen_range(0..rows), rng.gen_range(0..columns));
        let cells = render_board(rows, columns, &palette, highlight_at).unwrap();

        for row in 0..rows {
            let first = if row % 2 == 0 {
                palette.primary
            } else {
                palette.secondary
            };
            if (row, 0) != highlight_at {
                assert_eq!(at(&cells, columns, row, 0).color, first);
            }
            for column in 1..columns {
                let prev = at(&cells, columns, row, column - 1);
                let cell = at(&cells, columns, row, column);
                if prev.color == palette.highlight || cell.color == palette.highlight {
                    continue;
                }
                assert_ne!(prev.color, cell.color, "row {} column {}", row, column);
            }
        }
    }
}

#[test]
fn render_is_idempotent() {
    let mut rng = StdRng::seed_from_u64(42);
    let palette = random_palette(&mut rng);

    let first = render_board(9, 13, &palette, (4, 4)).unwrap();
    let second = render_board(9, 13, &palette, (4, 4)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn single_cell_highlighted() {
    let cells = render_board(1, 1, &Palette::default(), (0, 0)).unwrap();
    assert_eq!(cells.len(), 1);
    assert_eq!(cells[0].color, Color::GREEN);
}

#[test]
fn zero_dimension_fails() {
    assert_eq!(
        render_board(0, 10, &Palette::default(), (3, 2)),
        Err(BoardError::InvalidDimension {
            rows: 0,
            columns: 10
        })
    );
    assert!(render_board(10, 0, &Palette::default(), (3, 2)).is_err());
}
