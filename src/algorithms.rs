use itertools::Itertools;
use ncollide2d::na::RealField;

/// Finds the index `i` of the interval `[slice[i], slice[i + 1])` containing `test_value` in an
/// ascending slice. Values below the second element map to 0 and values at or beyond the last
/// element map to the last index.
pub fn preceding_index_search<N: RealField + Copy>(slice: &[N], test_value: N) -> usize {
    if slice.len() <= 1 || slice[1] > test_value {
        return 0;
    }

    let mut a = 1;
    let mut b = slice.len() - 1;
    if slice[b] <= test_value {
        return b;
    }

    while b > a + 1 {
        let check = (a + b) / 2;
        if test_value >= slice[check] {
            a = check;
        } else {
            b = check;
        }
    }
    a
}

/// True if every value is strictly greater than the one before it
pub fn strictly_increasing(slice: &[f64]) -> bool {
    slice.iter().tuple_windows().all(|(a, b)| b > a)
}

/// Index of the first occurrence of the smallest value
pub fn argmin<I: IntoIterator<Item = f64>>(values: I) -> Option<usize> {
    values
        .into_iter()
        .enumerate()
        .fold(None, |best: Option<(usize, f64)>, (i, v)| match best {
            Some((_, b)) if b <= v => best,
            _ => Some((i, v)),
        })
        .map(|(i, _)| i)
}

/// Index of the first occurrence of the largest value
pub fn argmax<I: IntoIterator<Item = f64>>(values: I) -> Option<usize> {
    argmin(values.into_iter().map(|v| -v))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::prelude::*;
    use test_case::test_case;

    fn naive(slice: &[f64], test_value: f64) -> usize {
        if slice.len() <= 1 || slice[1] > test_value {
            return 0;
        }

        if slice[slice.len() - 1] <= test_value {
            return slice.len() - 1;
        }

        for (i, v) in slice.iter().skip(1).enumerate() {
            if *v > test_value {
                return i;
            }
        }

        slice.len() - 1
    }

    #[test_case(0, -1.0)]
    #[test_case(0, 0.05)]
    #[test_case(1, 0.1)]
    #[test_case(2, 0.25)]
    #[test_case(4, 0.5)]
    fn test_simple_binary_search(e: usize, v: f64) {
        let test = [0.0, 0.1, 0.2, 0.3, 0.4];
        assert_eq!(e, preceding_index_search(&test, v));
    }

    #[test]
    fn test_binary_search_random() {
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let count: usize = rng.gen_range(2..200);
            let mut values: Vec<f64> = (0..count).map(|_| rng.gen_range(-10.0..10.0)).collect();
            values.sort_by(|a, b| a.total_cmp(b));

            for _ in 0..100 {
                let test = rng.gen_range(-11.0..11.0);
                assert_eq!(naive(&values, test), preceding_index_search(&values, test));
            }
        }
    }

    #[test_case(&[0.0, 1.0, 2.0], true)]
    #[test_case(&[0.0, 1.0, 1.0], false)]
    #[test_case(&[2.0, 1.0], false)]
    #[test_case(&[3.0], true)]
    fn test_strictly_increasing(values: &[f64], e: bool) {
        assert_eq!(e, strictly_increasing(values));
    }

    #[test]
    fn test_arg_extremes_take_first_occurrence() {
        let values = [1.0, -2.0, 4.0, -2.0, 4.0];
        assert_eq!(Some(1), argmin(values));
        assert_eq!(Some(2), argmax(values));
        assert_eq!(None, argmin(Vec::<f64>::new()));
    }
}
