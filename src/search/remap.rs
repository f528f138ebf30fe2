use rand::Rng;

use crate::color::Color;

/** removes a random color from a coloring using nb_colors colors.
Returns the removed color and a coloring using nb_colors-1 colors (see `remove_given_color`).

# Panics
 - if nb_colors < 2
*/
pub fn remove_color<R:Rng>(colors:&[Color], nb_colors:usize, rng:&mut R) -> (Color, Vec<Color>) {
    assert!(nb_colors >= 2, "remove_color: at least 2 colors are needed (got {})", nb_colors);
    let removed = rng.gen_range(0..nb_colors);
    (removed, remove_given_color(colors, nb_colors, removed, rng))
}

/** removes the color `removed` from a coloring using nb_colors colors:
 - vertices of the removed color get a random color in [0, nb_colors-1)
 - colors greater than the removed one are decremented (the palette stays contiguous)
 - smaller colors are unchanged

for instance, removing color 5 from 10 colors:
```text
7 1 4 2 5 9 0 3 6 8 5
6 1 4 2 ? 8 0 3 5 7 ?   (? random in [0,9))
```

The result is generally not a valid coloring.
*/
pub fn remove_given_color<R:Rng>(colors:&[Color], nb_colors:usize, removed:Color, rng:&mut R) -> Vec<Color> {
    debug_assert!(removed < nb_colors && nb_colors >= 2);
    colors.iter().map(|&c| {
        if c == removed {
            rng.gen_range(0..nb_colors-1)
        } else if c > removed {
            c - 1
        } else {
            c
        }
    }).collect()
}


#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_remove_given_color() {
        let mut rng = StdRng::seed_from_u64(0);
        let colors = vec![7,1,4,2,5,9,0,3,6,8,5];
        let res = remove_given_color(&colors, 10, 5, &mut rng);
        assert_eq!(res.len(), colors.len());
        for (before, after) in colors.iter().zip(res.iter()) {
            match before {
                5 => assert!(*after < 9),
                b if *b > 5 => assert_eq!(*after, b-1),
                b => assert_eq!(after, b),
            }
        }
    }

    #[test]
    fn test_two_colors_to_one() {
        let mut rng = StdRng::seed_from_u64(0);
        let (_, res) = remove_color(&[0,1,1,0], 2, &mut rng);
        assert_eq!(res, vec![0,0,0,0]);
    }

    #[test]
    #[should_panic]
    fn test_single_color_panics() {
        let mut rng = StdRng::seed_from_u64(0);
        remove_color(&[0,0], 1, &mut rng);
    }

    proptest! {
        #[test]
        fn remapped_colors_are_dense(
            (nb_colors, colors) in (2usize..10).prop_flat_map(|k| (Just(k), prop::collection::vec(0..k, 0..40))),
            seed in any::<u64>()
        ) {
            let mut rng = StdRng::seed_from_u64(seed);
            let (removed, res) = remove_color(&colors, nb_colors, &mut rng);
            prop_assert!(removed < nb_colors);
            prop_assert!(res.iter().all(|c| *c < nb_colors-1));
            for (before, after) in colors.iter().zip(res.iter()) {
                if *before < removed { prop_assert_eq!(before, after); }
                if *before > removed { prop_assert_eq!(*before-1, *after); }
            }
        }
    }
}
