//! End-to-end scenarios and cross-cutting properties.

use decafloat::BigFloat;
use decafloat::Radix;
use decafloat::RoundingMode;
use decafloat::Sign;

const RM: RoundingMode = RoundingMode::Nearest;

fn eps_at(e: i64) -> BigFloat {
    let mut eps = BigFloat::from_u64(1, 1, RM);
    eps.set_exponent(e);
    eps
}

#[test]
fn test_pi_parse_and_format() {
    // parsing a 61-digit pi literal at 50 digits of precision and formatting
    // it back gives the first 50 significant digits
    let d1 = BigFloat::parse(
        "3.141592653589793238462643383279502884197169399375105820974944",
        50,
        RM,
    );
    assert_eq!(
        d1.format(Radix::Dec),
        "3.1415926535897932384626433832795028841971693993751e+0"
    );
}

#[test]
fn test_point_one_plus_point_two() {
    let d1 = BigFloat::parse("0.1", 50, RM);
    let d2 = BigFloat::parse("0.2", 50, RM);
    assert_eq!(
        d1.add(&d2).to_fixed(50),
        "0.30000000000000000000000000000000000000000000000000"
    );
}

#[test]
fn test_sqrt_two_squared() {
    let d1 = BigFloat::parse("2", 50, RM).sqrt();
    let d2 = d1.mul(&d1).sub(&BigFloat::from_u64(2, 50, RM)).abs();
    assert!(d2.cmp(&BigFloat::parse("1e-49", 50, RM)) == Some(-1));
}

#[test]
fn test_exp_one_is_e() {
    let d1 = BigFloat::parse("1", 50, RM).exp();
    let d2 = BigFloat::e(50);
    assert!(d1.cmp(&d2) == Some(0));
}

#[test]
fn test_sin_pi_over_six() {
    let d1 = BigFloat::pi(60).div(&BigFloat::parse("6", 60, RM)).sin();
    assert_eq!(
        d1.to_fixed(50),
        "0.50000000000000000000000000000000000000000000000000"
    );
}

#[test]
fn test_two_to_the_hundred() {
    let d1 = BigFloat::parse("2", 50, RM).pow(&BigFloat::parse("100", 50, RM));
    assert_eq!(d1.format(Radix::Dec), "1.267650600228229401496703205376e+30");
}

#[test]
fn test_special_value_contagion() {
    let p = 40;
    let nan = BigFloat::nan();
    let inf = BigFloat::inf(Sign::Pos);
    let zero = BigFloat::new(p);
    let one = BigFloat::from_u64(1, p, RM);

    for op in [
        BigFloat::add,
        BigFloat::sub,
        BigFloat::mul,
        BigFloat::div,
        BigFloat::fmod,
        BigFloat::atan2,
        BigFloat::pow,
    ] {
        assert!(op(&nan, &one).is_nan());
        assert!(op(&one, &nan).is_nan());
        assert!(op(&nan, &nan).is_nan());
    }

    assert!(zero.mul(&inf).is_nan());
    assert!(inf.mul(&zero).is_nan());
    assert!(inf.sub(&inf).is_nan());
    assert!(one.div(&zero).is_inf_pos());
    assert!(one.div(&inf).is_zero());
    assert!(one.recip().cmp(&one) == Some(0));
    assert!(zero.recip().is_inf_pos());
    assert!(inf.recip().is_zero());

    assert!(inf.add(&one).is_inf_pos());
    assert!(inf.mul(&one.neg()).is_inf_neg());

    // NaN is unequal to everything including itself
    assert!(nan != nan);
    assert!(nan != one);
    assert!(!(nan < one) && !(nan > one));
}

#[test]
fn test_arithmetic_identities() {
    let p = 40;
    let vals = ["0.125", "1.5", "2", "3.75", "12345.678", "0.0001234"];

    for s in vals {
        let a = BigFloat::parse(s, p, RM);

        // a * (1/a) = 1
        let d1 = a.mul(&a.recip());
        assert!(
            d1.sub(&BigFloat::from_u64(1, p, RM)).abs().cmp(&eps_at(-120)) == Some(-1),
            "recip {}",
            s
        );

        // sqrt(a)^2 = a
        let d1 = a.sqrt();
        let d2 = d1.mul(&d1);
        assert!(
            a.sub(&d2).abs().cmp(&eps_at(a.exponent() - 120)) == Some(-1),
            "sqrt {}",
            s
        );

        // exp(ln(a)) = a
        let d1 = a.ln().exp();
        assert!(
            a.sub(&d1).abs().cmp(&eps_at(a.exponent() - 115)) == Some(-1),
            "exp ln {}",
            s
        );

        // sin^2 + cos^2 = 1
        let sn = a.sin();
        let cs = a.cos();
        let d1 = sn.mul(&sn).add(&cs.mul(&cs));
        assert!(
            d1.sub(&BigFloat::from_u64(1, p, RM)).abs().cmp(&eps_at(-120)) == Some(-1),
            "sin cos {}",
            s
        );

        // cosh^2 - sinh^2 = 1
        let sh = a.sinh();
        let ch = a.cosh();
        let d1 = ch.mul(&ch).sub(&sh.mul(&sh));
        let scale = ch.exponent() as i64 * 2;
        assert!(
            d1.sub(&BigFloat::from_u64(1, p, RM)).abs().cmp(&eps_at(scale - 120)) == Some(-1),
            "sinh cosh {}",
            s
        );

        // tan * cos = sin
        let d1 = a.tan().mul(&cs);
        assert!(
            d1.sub(&sn).abs().cmp(&eps_at(sn.exponent() - 115)) == Some(-1),
            "tan cos {}",
            s
        );
    }
}

#[test]
fn test_symmetries() {
    let p = 40;

    for s in ["0.25", "1.0", "2.5", "5.125"] {
        let x = BigFloat::parse(s, p, RM);

        // sin(-x) = -sin(x), cos(-x) = cos(x)
        assert!(x.neg().sin().cmp(&x.sin().neg()) == Some(0), "{}", s);
        assert!(x.neg().cos().cmp(&x.cos()) == Some(0), "{}", s);

        // atan2(-y, x) = -atan2(y, x)
        let y = BigFloat::parse("0.75", p, RM);
        let d1 = y.neg().atan2(&x);
        let d2 = y.atan2(&x).neg();
        assert!(d1.sub(&d2).abs().cmp(&eps_at(-120)) == Some(-1), "{}", s);
    }
}

#[test]
fn test_monotonicity() {
    let p = 30;

    // exp and sqrt are monotone on a dense grid
    let mut prev_exp: Option<BigFloat> = None;
    let mut prev_sqrt: Option<BigFloat> = None;
    for i in 0..200 {
        let x = BigFloat::from_i64(i - 100, p, RM).div(&BigFloat::from_u64(25, p, RM));

        let e = x.exp();
        if let Some(pe) = prev_exp {
            assert!(e.cmp(&pe) != Some(-1), "{}", i);
        }
        prev_exp = Some(e);

        let xs = x.abs().sqrt();
        if let Some(ref ps) = prev_sqrt {
            if !x.is_negative() {
                assert!(xs.cmp(ps) != Some(-1), "{}", i);
            }
        }
        if !x.is_negative() {
            prev_sqrt = Some(xs);
        }
    }
}

#[test]
fn test_precision_monotonicity() {
    // the first digits of a value formatted at a higher precision match the
    // lower-precision rendering to within one unit in the last place
    let s = "0.12345678901234567890123456789012345678901234567890123456789";

    let lo = BigFloat::parse(s, 20, RM);
    let hi = BigFloat::parse(s, 60, RM);

    let d = lo.sub(&hi).abs();
    assert!(d.cmp(&eps_at(-70)) == Some(-1));

    let s_lo = lo.format(Radix::Dec);
    let s_hi = hi.format(Radix::Dec);
    assert_eq!(&s_lo[..10], &s_hi[..10]);
}

#[test]
fn test_rounding_determinism() {
    let s = "1.372813461237461932846192364915237461927346192374612";
    for rm in [
        RoundingMode::Nearest,
        RoundingMode::Up,
        RoundingMode::Down,
        RoundingMode::ToZero,
    ] {
        let d1 = BigFloat::parse(s, 33, rm);
        let d2 = BigFloat::parse(s, 33, rm);
        assert!(d1.cmp(&d2) == Some(0), "{:?}", rm);
        assert_eq!(d1.format(Radix::Dec), d2.format(Radix::Dec));
    }

    // directed rounding brackets the value
    let up = BigFloat::parse(s, 33, RoundingMode::Up);
    let down = BigFloat::parse(s, 33, RoundingMode::Down);
    let near = BigFloat::parse(s, 33, RoundingMode::Nearest);
    assert!(down.cmp(&up) != Some(1));
    assert!(near.cmp(&down) != Some(-1));
    assert!(near.cmp(&up) != Some(1));
}

#[test]
fn test_frexp_ldexp_round_trip() {
    let p = 40;
    for s in ["0.375", "1", "12.625", "-3.5", "1e100", "-7e-30"] {
        let d1 = BigFloat::parse(s, p, RM);
        let (m, e) = d1.frexp();
        assert!(m.ldexp(e).cmp(&d1) == Some(0), "{}", s);
    }
}

#[test]
fn test_constants() {
    // pi at 50 digits
    let pi = BigFloat::pi(50);
    assert_eq!(
        pi.format(Radix::Dec),
        "3.1415926535897932384626433832795028841971693993751e+0"
    );

    // ln(10) = ln(2) + ln(5)
    let d1 = BigFloat::ln_10(45);
    let d2 = BigFloat::ln_2(50).add(&BigFloat::ln_5(50));
    assert!(d1.sub(&d2).abs().cmp(&eps_at(-145)) == Some(-1));

    // epsilon: 1 + eps differs from 1
    let one = BigFloat::from_u64(1, 30, RM);
    let eps = BigFloat::epsilon(30);
    assert!(one.add(&eps).cmp(&one) == Some(1));
}
