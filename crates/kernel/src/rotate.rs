use twisty_common::Direction;

/// Rotate a square grid a quarter turn in place.
///
/// Works ring by ring from the outside in. Each group of four symmetric
/// cells `(i, j)`, `(j, n - i)`, `(n - i, n - j)`, `(n - j, i)` is cycled
/// with three swaps, so every cell moves exactly once and no element needs
/// to be `Copy` or `Clone`.
pub fn rotate<T, const N: usize>(grid: &mut [[T; N]; N], direction: Direction) {
    if N < 2 {
        return;
    }
    let n = N - 1;
    let cells = grid.as_flattened_mut();
    let at = |row: usize, col: usize| row * N + col;

    for i in 0..N / 2 {
        for j in i..n - i {
            let top = at(i, j);
            let right = at(j, n - i);
            let bottom = at(n - i, n - j);
            let left = at(n - j, i);

            match direction {
                // left -> top, bottom -> left, right -> bottom, top -> right
                Direction::Clockwise => {
                    cells.swap(top, left);
                    cells.swap(left, bottom);
                    cells.swap(bottom, right);
                }
                // right -> top, bottom -> right, left -> bottom, top -> left
                Direction::CounterClockwise => {
                    cells.swap(top, right);
                    cells.swap(right, bottom);
                    cells.swap(bottom, left);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn clockwise_3x3() {
        let mut grid = [[1, 2, 3], [4, 5, 6], [7, 8, 9]];
        rotate(&mut grid, Direction::Clockwise);
        assert_eq!(grid, [[7, 4, 1], [8, 5, 2], [9, 6, 3]]);
    }

    #[test]
    fn counter_clockwise_3x3() {
        let mut grid = [[1, 2, 3], [4, 5, 6], [7, 8, 9]];
        rotate(&mut grid, Direction::CounterClockwise);
        assert_eq!(grid, [[3, 6, 9], [2, 5, 8], [1, 4, 7]]);
    }

    #[test]
    fn clockwise_4x4_moves_inner_ring() {
        let mut grid = [[1, 2, 3, 4], [5, 6, 7, 8], [9, 10, 11, 12], [13, 14, 15, 16]];
        rotate(&mut grid, Direction::Clockwise);
        assert_eq!(
            grid,
            [[13, 9, 5, 1], [14, 10, 6, 2], [15, 11, 7, 3], [16, 12, 8, 4]]
        );
    }

    #[test]
    fn single_cell_is_untouched() {
        let mut grid = [[42]];
        rotate(&mut grid, Direction::Clockwise);
        assert_eq!(grid, [[42]]);
    }

    #[test]
    fn works_for_non_copy_elements() {
        let mut grid = [
            [String::from("a"), String::from("b")],
            [String::from("c"), String::from("d")],
        ];
        rotate(&mut grid, Direction::Clockwise);
        assert_eq!(grid, [["c", "a"], ["d", "b"]]);
    }

    proptest! {
        #[test]
        fn clockwise_then_counter_clockwise_is_identity(cells in prop::array::uniform25(any::<u16>())) {
            let mut grid = [[0u16; 5]; 5];
            for (k, v) in cells.iter().enumerate() {
                grid[k / 5][k % 5] = *v;
            }
            let original = grid;
            rotate(&mut grid, Direction::Clockwise);
            rotate(&mut grid, Direction::CounterClockwise);
            prop_assert_eq!(grid, original);
        }

        #[test]
        fn four_quarter_turns_are_identity(cells in prop::array::uniform16(any::<i32>()), ccw in any::<bool>()) {
            let mut grid = [[0i32; 4]; 4];
            for (k, v) in cells.iter().enumerate() {
                grid[k / 4][k % 4] = *v;
            }
            let original = grid;
            let direction = if ccw { Direction::CounterClockwise } else { Direction::Clockwise };
            for _ in 0..4 {
                rotate(&mut grid, direction);
            }
            prop_assert_eq!(grid, original);
        }

        #[test]
        fn two_clockwise_equal_two_counter_clockwise(cells in prop::array::uniform9(any::<u8>())) {
            let mut a = [[0u8; 3]; 3];
            for (k, v) in cells.iter().enumerate() {
                a[k / 3][k % 3] = *v;
            }
            let mut b = a;
            rotate(&mut a, Direction::Clockwise);
            rotate(&mut a, Direction::Clockwise);
            rotate(&mut b, Direction::CounterClockwise);
            rotate(&mut b, Direction::CounterClockwise);
            prop_assert_eq!(a, b);
        }
    }
}
