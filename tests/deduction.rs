use wff_prover::{
    context::Context,
    procedures::deduction::{DerivationLine, ProofType},
    reports::Report,
    structures::{step::Step, wff::Wff},
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

fn steps(proof: &[DerivationLine]) -> Vec<Step> {
    proof.iter().map(|line| line.step).collect()
}

mod propositional {
    use super::*;

    #[test]
    fn modus_ponens() {
        let _ = env_logger::builder().is_test(true).try_init();

        let mut the_context = Context::default();
        let proof = the_context
            .prove(&[Wff::implies(p(), q()), p()], &q(), ProofType::Direct)
            .unwrap()
            .unwrap();

        assert_eq!(steps(&proof), vec![Step::Premise, Step::Premise, Step::ModusPonens]);
        assert_eq!(proof[2].formula, q());
        assert_eq!(proof[2].parents, vec![1, 2]);
        assert_eq!(the_context.report(), Report::Proved);
    }

    #[test]
    fn hypothetical_syllogism() {
        let premises = [Wff::implies(p(), q()), Wff::implies(q(), r())];

        let mut the_context = Context::default();
        let proof = the_context
            .prove(&premises, &Wff::implies(p(), r()), ProofType::Direct)
            .unwrap()
            .unwrap();

        let derived = proof
            .iter()
            .filter(|line| !line.step.is_assumption())
            .collect::<Vec<_>>();
        assert_eq!(derived.len(), 1);
        assert_eq!(derived[0].step, Step::HypotheticalSyllogism);
        assert_eq!(derived[0].justification(), "HS 1, 2");
    }

    #[test]
    fn redundant_premises_are_suppressed() {
        let a = Wff::atom('A');
        let b = Wff::atom('B');
        let premises = [
            Wff::and(a.clone(), a.clone()),
            Wff::implies(a.clone(), a.clone()),
            a.clone(),
            Wff::implies(a.clone(), b.clone()),
        ];

        let mut the_context = Context::default();
        let proof = the_context
            .prove(&premises, &b, ProofType::Direct)
            .unwrap()
            .unwrap();

        assert!(proof.iter().all(|line| !line.formula.is_redundant()));
        assert_eq!(proof.last().unwrap().step, Step::ModusPonens);
    }

    #[test]
    fn conjunction_of_eliminations() {
        // P ∧ Q ⊢ Q ∧ P
        let mut the_context = Context::default();
        let proof = the_context
            .prove(&[Wff::and(p(), q())], &Wff::and(q(), p()), ProofType::Direct)
            .unwrap()
            .unwrap();

        assert_eq!(proof.last().unwrap().step, Step::ConjunctionIntroduction);
        assert_eq!(proof.last().unwrap().parents.len(), 2);
    }

    #[test]
    fn indirect_excluded_middle() {
        // ⊢ P ∨ ¬P, by assuming ¬(P ∨ ¬P).
        let conclusion = Wff::or(p(), p().negate());

        let mut the_context = Context::default();
        let proof = the_context
            .prove(&[], &conclusion, ProofType::Indirect)
            .unwrap()
            .unwrap();

        assert_eq!(proof[0].step, Step::AssumptionForRAA);
        assert_eq!(proof.last().unwrap().formula, conclusion);
    }

    #[test]
    fn unrelated_conclusion_is_not_proved() {
        let mut the_context = Context::default();
        let proof = the_context
            .prove(&[Wff::implies(p(), q()), q()], &p(), ProofType::Direct)
            .unwrap();

        assert!(proof.is_none());
        assert_eq!(the_context.report(), Report::NotProved);
    }

    #[test]
    fn parents_precede_lines() {
        let s = Wff::atom('S');
        let premises = [
            Wff::or(p(), q()),
            Wff::implies(p(), r()),
            Wff::implies(q(), s.clone()),
        ];

        let mut the_context = Context::default();
        let proof = the_context
            .prove(&premises, &Wff::or(r(), s), ProofType::Direct)
            .unwrap()
            .unwrap();

        for (number, line) in proof.iter().enumerate() {
            assert!(line.parents.iter().all(|parent| *parent <= number));
            assert!(line.parents.windows(2).all(|pair| pair[0] < pair[1]));
        }
        assert_eq!(proof.last().unwrap().step, Step::ConstructiveDilemma);
    }
}

mod first_order {
    use super::*;

    fn px() -> Wff {
        Wff::predicate('P', vec![Wff::variable('x')]).unwrap()
    }

    fn pa() -> Wff {
        Wff::predicate('P', vec![Wff::constant('a')]).unwrap()
    }

    #[test]
    fn universal_elimination() {
        let mut the_context = Context::default();
        let proof = the_context
            .prove(&[Wff::universal("x", px()).unwrap()], &pa(), ProofType::Direct)
            .unwrap()
            .unwrap();

        assert_eq!(steps(&proof), vec![Step::Premise, Step::UniversalElimination]);
        assert_eq!(proof[1].formula, pa());
        assert_eq!(proof[1].parents, vec![1]);
    }

    #[test]
    fn existential_introduction() {
        let mut the_context = Context::default();
        let proof = the_context
            .prove(&[pa()], &Wff::existential("x", px()).unwrap(), ProofType::Direct)
            .unwrap()
            .unwrap();

        assert_eq!(steps(&proof), vec![Step::Premise, Step::ExistentialIntroduction]);
    }

    #[test]
    fn argument_as_a_list() {
        let wffs = [Wff::universal("x", px()).unwrap(), pa()];

        let mut the_context = Context::default();
        let proof = the_context
            .prove_argument(&wffs, ProofType::Direct)
            .unwrap()
            .unwrap();
        assert_eq!(proof.len(), 2);
    }
}
