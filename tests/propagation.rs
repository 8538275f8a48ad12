use bcp_engine::{
    context::{Conflict, Context, ContextState},
    structures::{
        clause::Watch,
        literal::{neg, pos},
        valuation::TruthValue,
    },
};

mod propagation {
    use super::*;

    #[test]
    fn chain() {
        let mut ctx = Context::new(3).unwrap();

        assert_eq!(ctx.add_clause(vec![pos(0)]), Ok(true));
        assert_eq!(ctx.add_clause(vec![neg(0), pos(1)]), Ok(true));
        assert_eq!(ctx.add_clause(vec![neg(1), pos(2)]), Ok(true));

        assert_eq!(ctx.unit_propagate(), Ok(true));

        assert_eq!(ctx.value_of(0), Ok(TruthValue::True));
        assert_eq!(ctx.value_of(1), Ok(TruthValue::True));
        assert_eq!(ctx.value_of(2), Ok(TruthValue::True));
        assert_eq!(ctx.trail(), &[pos(0), pos(1), pos(2)]);
    }

    #[test]
    fn conflict() {
        let mut ctx = Context::new(2).unwrap();

        assert_eq!(ctx.add_clause(vec![pos(0)]), Ok(true));
        assert_eq!(ctx.add_clause(vec![neg(0), pos(1)]), Ok(true));
        assert_eq!(ctx.add_clause(vec![neg(0), neg(1)]), Ok(true));

        assert_eq!(ctx.unit_propagate(), Ok(false));
        assert!(matches!(ctx.conflict(), Some(Conflict::Clause(_))));
        assert_eq!(ctx.counters().conflicts, 1);
    }

    #[test]
    fn conflict_from_all_four() {
        let mut ctx = Context::new(2).unwrap();

        assert_eq!(ctx.add_clause(vec![pos(0), pos(1)]), Ok(true));
        assert_eq!(ctx.add_clause(vec![neg(0), neg(1)]), Ok(true));
        assert_eq!(ctx.add_clause(vec![pos(0), neg(1)]), Ok(true));
        assert_eq!(ctx.add_clause(vec![neg(0), pos(1)]), Ok(true));

        assert_eq!(ctx.unit_propagate(), Ok(true));
        assert_eq!(ctx.assign(pos(0)), Ok(true));
        assert_eq!(ctx.unit_propagate(), Ok(false));
    }

    #[test]
    fn no_op_stability() {
        let mut ctx = Context::new(4).unwrap();

        assert_eq!(ctx.add_clause(vec![neg(0), pos(1), pos(2)]), Ok(true));
        assert_eq!(ctx.add_clause(vec![neg(1), pos(3)]), Ok(true));
        assert_eq!(ctx.add_clause(vec![pos(0)]), Ok(true));
        assert_eq!(ctx.add_clause(vec![neg(2)]), Ok(true));

        assert_eq!(ctx.unit_propagate(), Ok(true));
        let values = ctx.valuation().values().collect::<Vec<_>>();
        let trail = ctx.trail().to_vec();

        assert_eq!(ctx.unit_propagate(), Ok(true));
        assert_eq!(ctx.valuation().values().collect::<Vec<_>>(), values);
        assert_eq!(ctx.trail(), trail.as_slice());
        assert_eq!(ctx.state(), ContextState::Propagated);
    }

    #[test]
    fn watch_moves_past_falsified() {
        let mut ctx = Context::new(4).unwrap();

        assert_eq!(ctx.add_clause(vec![pos(0), pos(1), pos(2), pos(3)]), Ok(true));
        let (key, _) = ctx.clause_db().iter().next().unwrap();

        assert_eq!(ctx.assign(neg(0)), Ok(true));
        assert_eq!(ctx.assign(neg(2)), Ok(true));
        assert_eq!(ctx.unit_propagate(), Ok(true));

        // Watch A skips the falsified third literal.
        let clause = ctx.clause(&key).unwrap();
        assert_eq!(clause.watcher(Watch::A), Some(pos(3)));
        assert_eq!(clause.watcher(Watch::B), Some(pos(1)));
        assert!(!ctx.watches().is_watching(pos(0), &key));
        assert!(ctx.watches().is_watching(pos(3), &key));
        assert_eq!(ctx.value_of(1), Ok(TruthValue::Undefined));
        assert_eq!(ctx.value_of(3), Ok(TruthValue::Undefined));

        assert_eq!(ctx.assign(neg(3)), Ok(true));
        assert_eq!(ctx.unit_propagate(), Ok(true));
        assert_eq!(ctx.value_of(1), Ok(TruthValue::True));
        assert_eq!(ctx.counters().derivations, 1);
    }

    #[test]
    fn satisfied_other_watch_is_left() {
        let mut ctx = Context::new(3).unwrap();

        assert_eq!(ctx.add_clause(vec![pos(0), pos(1), pos(2)]), Ok(true));
        let (key, _) = ctx.clause_db().iter().next().unwrap();

        assert_eq!(ctx.assign(pos(1)), Ok(true));
        assert_eq!(ctx.assign(neg(0)), Ok(true));
        assert_eq!(ctx.unit_propagate(), Ok(true));

        assert!(ctx.watches().is_watching(pos(0), &key));
        assert!(ctx.watches().is_watching(pos(1), &key));
        assert_eq!(ctx.counters().watch_moves, 0);
        assert_eq!(ctx.value_of(2), Ok(TruthValue::Undefined));
    }

    #[test]
    fn clause_added_after_fixpoint() {
        let mut ctx = Context::new(3).unwrap();

        assert_eq!(ctx.add_clause(vec![pos(0)]), Ok(true));
        assert_eq!(ctx.add_clause(vec![pos(1)]), Ok(true));
        assert_eq!(ctx.unit_propagate(), Ok(true));

        assert_eq!(ctx.add_clause(vec![neg(0), neg(1), pos(2)]), Ok(true));
        assert_eq!(ctx.state(), ContextState::Input);

        assert_eq!(ctx.unit_propagate(), Ok(true));
        assert_eq!(ctx.value_of(2), Ok(TruthValue::True));
    }

    #[test]
    fn falsified_clause_added_after_fixpoint() {
        let mut ctx = Context::new(2).unwrap();

        assert_eq!(ctx.add_clause(vec![neg(0)]), Ok(true));
        assert_eq!(ctx.add_clause(vec![neg(1)]), Ok(true));
        assert_eq!(ctx.unit_propagate(), Ok(true));

        assert_eq!(ctx.add_clause(vec![pos(0), pos(1)]), Ok(true));
        assert_eq!(ctx.unit_propagate(), Ok(false));
    }

    #[test]
    fn first_conflict_in_trail_order() {
        let mut ctx = Context::new(4).unwrap();

        // Propagation of 0 forces 1 and 2, in order.
        assert_eq!(ctx.add_clause(vec![neg(0), pos(1)]), Ok(true));
        assert_eq!(ctx.add_clause(vec![neg(0), pos(2)]), Ok(true));

        // Each of 1 and 2 conflicts with some clause, and 1 is propagated first.
        assert_eq!(ctx.add_clause(vec![neg(2), pos(3)]), Ok(true));
        assert_eq!(ctx.add_clause(vec![neg(2), neg(3)]), Ok(true));
        assert_eq!(ctx.add_clause(vec![neg(1), neg(3)]), Ok(true));
        assert_eq!(ctx.add_clause(vec![neg(1), pos(3)]), Ok(true));

        let keys = ctx.clause_db().iter().map(|(key, _)| key).collect::<Vec<_>>();

        assert_eq!(ctx.assign(pos(0)), Ok(true));
        assert_eq!(ctx.unit_propagate(), Ok(false));

        assert_eq!(ctx.trail(), &[pos(0), pos(1), pos(2), neg(3)]);
        assert_eq!(ctx.conflict(), Some(Conflict::Clause(keys[5])));
    }

    #[test]
    fn repeated_literals() {
        let mut ctx = Context::new(3).unwrap();

        assert_eq!(ctx.add_clause(vec![pos(0), pos(0), pos(1)]), Ok(true));
        let (key, _) = ctx.clause_db().iter().next().unwrap();

        assert_eq!(ctx.assign(neg(0)), Ok(true));
        assert_eq!(ctx.unit_propagate(), Ok(true));
        assert_eq!(ctx.value_of(1), Ok(TruthValue::True));
        assert_eq!(ctx.trail(), &[neg(0), pos(1)]);

        // Watch A moved to +1, and watch B stays on +0 as the clause forced +1.
        let clause = ctx.clause(&key).unwrap();
        assert_eq!(clause.watcher(Watch::A), Some(pos(1)));
        assert_eq!(clause.watcher(Watch::B), Some(pos(0)));
        assert!(ctx.watches().is_watching(pos(0), &key));
        assert!(ctx.watches().is_watching(pos(1), &key));

        let mut ctx = Context::new(3).unwrap();
        assert_eq!(ctx.add_clause(vec![pos(2), pos(2)]), Ok(true));
        assert_eq!(ctx.assign(neg(2)), Ok(true));
        assert_eq!(ctx.unit_propagate(), Ok(false));
    }

    #[test]
    fn repeated_literals_move_both_watches() {
        let mut ctx = Context::new(3).unwrap();

        assert_eq!(ctx.add_clause(vec![pos(0), pos(0), pos(1), pos(2)]), Ok(true));
        let (key, _) = ctx.clause_db().iter().next().unwrap();

        assert_eq!(ctx.assign(neg(0)), Ok(true));
        assert_eq!(ctx.unit_propagate(), Ok(true));

        let clause = ctx.clause(&key).unwrap();
        assert_eq!(clause.watcher(Watch::A), Some(pos(1)));
        assert_eq!(clause.watcher(Watch::B), Some(pos(2)));
        assert!(ctx.watches().is_watching(pos(1), &key));
        assert!(ctx.watches().is_watching(pos(2), &key));

        assert_eq!(ctx.assign(neg(1)), Ok(true));
        assert_eq!(ctx.unit_propagate(), Ok(true));
        assert_eq!(ctx.value_of(2), Ok(TruthValue::True));
    }

    #[test]
    fn rounds_resume_after_assignment() {
        let mut ctx = Context::new(100).unwrap();

        for k in 0..50 {
            assert_eq!(ctx.add_clause(vec![neg(2 * k), pos(2 * k + 1)]), Ok(true));
        }
        assert_eq!(ctx.unit_propagate(), Ok(true));

        for k in 0..50 {
            assert_eq!(ctx.assign(pos(2 * k)), Ok(true));
            assert_eq!(ctx.unit_propagate(), Ok(true));
            assert_eq!(ctx.value_of(2 * k + 1), Ok(TruthValue::True));
        }

        // Each literal on the trail is propagated once.
        assert_eq!(ctx.trail().len(), 100);
        assert_eq!(ctx.counters().propagations, 100);
        assert_eq!(ctx.counters().inspections, 50);
    }

    #[test]
    fn counters() {
        let mut ctx = Context::new(3).unwrap();

        assert_eq!(ctx.add_clause(vec![pos(0)]), Ok(true));
        assert_eq!(ctx.add_clause(vec![neg(0), pos(1)]), Ok(true));
        assert_eq!(ctx.add_clause(vec![neg(1), pos(2)]), Ok(true));
        assert_eq!(ctx.unit_propagate(), Ok(true));

        assert_eq!(ctx.counters().propagations, 3);
        assert_eq!(ctx.counters().derivations, 2);
        assert_eq!(ctx.counters().conflicts, 0);
    }
}
