use num_traits::PrimInt;

/// Integer division rounding toward negative infinity.
///
/// Rust's `/` truncates toward zero, which would bias the walk asymmetrically
/// around the origin: `-3 / 2 == -1`, while `floor_div(-3, 2) == -2`. The grid
/// is symmetric in `[-dim/2, dim/2]`, so the attractor shape depends on getting
/// this exactly right for negative coordinates.
pub fn floor_div<T: PrimInt>(a: T, b: T) -> T {
  let (q, r) = (a / b, a % b);
  if r != T::zero() && (r < T::zero()) != (b < T::zero()) {
    q - T::one()
  } else {
    q
  }
}

#[macro_export]
macro_rules! profile(
  ($title: literal, $stmt: stmt) => {{
    let t0 = std::time::Instant::now();
    $stmt
    println!("{} profile: {}ms", $title, t0.elapsed().as_millis());
  }}
);

#[cfg(test)]
mod tests {
  use super::floor_div;

  #[test] fn floor_div_matches_truncation_for_positive() {
    assert_eq!(floor_div(7, 2), 3);
    assert_eq!(floor_div(8, 2), 4);
    assert_eq!(floor_div(0, 5), 0);
  }

  #[test] fn floor_div_rounds_down_for_negative() {
    assert_eq!(floor_div(-3, 2), -2);
    assert_eq!(floor_div(-1, 2), -1);
    assert_eq!(floor_div(-4, 2), -2);
    assert_eq!(floor_div(3, -2), -2);
    assert_eq!(floor_div(-3, -2), 1);
  }
}
