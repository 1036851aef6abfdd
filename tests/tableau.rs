use wff_prover::{
    config::Config,
    context::Context,
    db::tableau::Shape,
    procedures::argument::counterexample_wff,
    reports::{Diagnostic, Report},
    structures::wff::Wff,
};

fn p() -> Wff {
    Wff::atom('P')
}

fn q() -> Wff {
    Wff::atom('Q')
}

fn r() -> Wff {
    Wff::atom('R')
}

mod propositional {
    use super::*;

    #[test]
    fn contradiction() {
        let mut the_context = Context::from_config(Config::default());
        let tableau = the_context
            .build_tableau(&Wff::and(p(), p().negate()))
            .unwrap();

        let wffs = tableau.walk().iter().map(|step| step.wff.clone()).collect::<Vec<_>>();
        assert_eq!(wffs, vec![Wff::and(p(), p().negate()), p(), p().negate()]);

        assert!(tableau.has_all_closed());
        assert_eq!(the_context.report(), Report::Closed);
    }

    #[test]
    fn excluded_middle() {
        let mut the_context = Context::from_config(Config::default());
        let tableau = the_context
            .build_tableau(&Wff::or(p(), p().negate()))
            .unwrap();

        let root = tableau.walk()[0].shape;
        assert_eq!(root, Shape::Branch);

        assert_eq!(tableau.open_leaves_below(tableau.root()).len(), 2);
        assert!(!tableau.has_all_closed());
        assert!(!tableau.has_some_closed());
        assert_eq!(the_context.report(), Report::Open);
    }

    #[test]
    fn idempotent() {
        let wff = Wff::and(
            Wff::implies(p(), q()),
            Wff::and(p(), q().negate()),
        );

        let mut the_context = Context::from_config(Config::default());
        let first = the_context.build_tableau(&wff).unwrap();
        assert!(first.has_all_closed());
        let dispatches = the_context.counters.dispatches;

        let again = the_context
            .build_tableau(first.get(first.root()).unwrap().wff())
            .unwrap();
        assert!(again.has_all_closed());
        assert_eq!(first.len(), again.len());
        assert_eq!(the_context.counters.dispatches, dispatches);
    }

    #[test]
    fn branches_close_independently() {
        // (P ∨ Q) ∧ ¬P
        let wff = Wff::and(Wff::or(p(), q()), p().negate());
        let mut the_context = Context::default();
        let tableau = the_context.build_tableau(&wff).unwrap();

        assert!(tableau.has_some_closed());
        assert!(!tableau.has_all_closed());
        assert_eq!(the_context.report(), Report::Open);
    }
}

mod arguments {
    use super::*;

    #[test]
    fn modus_tollens_is_valid() {
        let premises = [Wff::implies(p(), q()), q().negate()];
        let mut the_context = Context::default();
        assert_eq!(
            the_context.check_argument(&premises, &p().negate()),
            Ok(Report::Valid)
        );
    }

    #[test]
    fn affirming_the_consequent_is_invalid() {
        let premises = [Wff::implies(p(), q()), q()];
        let mut the_context = Context::default();
        assert_eq!(the_context.check_argument(&premises, &p()), Ok(Report::Invalid));
    }

    #[test]
    fn constructive_dilemma_is_valid() {
        let s = Wff::atom('S');
        let premises = [
            Wff::or(p(), q()),
            Wff::implies(p(), r()),
            Wff::implies(q(), s.clone()),
        ];
        let mut the_context = Context::default();
        assert_eq!(
            the_context.check_argument(&premises, &Wff::or(r(), s)),
            Ok(Report::Valid)
        );
    }

    #[test]
    fn counterexample_is_rooted_in_order() {
        let premises = [p(), q()];
        let wff = counterexample_wff(&premises, &r());
        assert_eq!(wff.to_string(), "(P ∧ (Q ∧ ¬R))");
    }
}

mod first_order {
    use super::*;

    fn f(letter: char, symbol: char) -> Wff {
        let term = match symbol {
            'a'..='t' => Wff::constant(symbol),
            _ => Wff::variable(symbol),
        };
        Wff::predicate(letter, vec![term]).unwrap()
    }

    #[test]
    fn syllogism() {
        // (∀x)(Fx → Gx), (∀x)(Gx → Hx) ⊢ (∀x)(Fx → Hx)
        let premises = [
            Wff::universal("x", Wff::implies(f('F', 'x'), f('G', 'x'))).unwrap(),
            Wff::universal("x", Wff::implies(f('G', 'x'), f('H', 'x'))).unwrap(),
        ];
        let conclusion = Wff::universal("x", Wff::implies(f('F', 'x'), f('H', 'x'))).unwrap();

        let mut the_context = Context::default();
        assert_eq!(
            the_context.check_argument(&premises, &conclusion),
            Ok(Report::Valid)
        );
    }

    #[test]
    fn existential_does_not_give_universal() {
        let premises = [Wff::existential("x", f('F', 'x')).unwrap()];
        let conclusion = Wff::universal("x", f('F', 'x')).unwrap();

        let mut the_context = Context::default();
        assert_eq!(
            the_context.check_argument(&premises, &conclusion),
            Ok(Report::Invalid)
        );
    }

    #[test]
    fn identity_is_symmetric() {
        let a_b = Wff::identity(Wff::constant('a'), Wff::constant('b')).unwrap();
        let b_a = Wff::identity(Wff::constant('b'), Wff::constant('a')).unwrap();

        let mut the_context = Context::default();
        assert_eq!(the_context.check_argument(&[a_b], &b_a), Ok(Report::Valid));
    }

    #[test]
    fn leibniz() {
        // Fa, a = b ⊢ Fb
        let a_b = Wff::identity(Wff::constant('a'), Wff::constant('b')).unwrap();

        let mut the_context = Context::default();
        assert_eq!(
            the_context.check_argument(&[f('F', 'a'), a_b], &f('F', 'b')),
            Ok(Report::Valid)
        );
    }

    #[test]
    fn runaway_universal() {
        // (∀x)(∃y)Rxy has no finite tableau.
        let rxy = Wff::predicate('R', vec![Wff::variable('x'), Wff::variable('y')]).unwrap();
        let wff = Wff::universal("x", Wff::existential("y", rxy).unwrap()).unwrap();

        let mut the_context = Context::default();
        let _ = the_context.build_tableau(&wff).unwrap();
        assert_eq!(the_context.report(), Report::Unknown);
        assert!(!the_context.timed_out());
        assert_eq!(the_context.diagnostics(), &[Diagnostic::ConstantsExhausted]);
    }
}
