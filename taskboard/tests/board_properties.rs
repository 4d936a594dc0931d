//! Behavioural properties of the board store

use proptest::prelude::*;
use rstest::rstest;
use taskboard::{BoardConfig, ColumnId, DropTarget, IdStrategy, KanbanBoard, TaskId};

fn board() -> KanbanBoard {
    KanbanBoard::with_config(BoardConfig::default().with_id_strategy(IdStrategy::Sequential))
        .unwrap()
}

fn column_order(board: &KanbanBoard) -> Vec<ColumnId> {
    board.columns().iter().map(|c| c.id.clone()).collect()
}

#[derive(Debug, Clone)]
enum Action {
    AddColumn,
    AddTask(usize),
    DeleteColumn(usize),
}

fn action() -> impl Strategy<Value = Action> {
    prop_oneof![
        Just(Action::AddColumn),
        (0usize..8).prop_map(Action::AddTask),
        (0usize..8).prop_map(Action::DeleteColumn),
    ]
}

proptest! {
    #[test]
    fn deleted_columns_leave_no_tasks_behind(actions in prop::collection::vec(action(), 1..60)) {
        let mut board = board();
        let mut deleted: Vec<ColumnId> = Vec::new();

        for action in actions {
            let columns = column_order(&board);
            match action {
                Action::AddColumn => {
                    board.add_column();
                }
                Action::AddTask(i) if !columns.is_empty() => {
                    board.add_task(&columns[i % columns.len()]);
                }
                Action::DeleteColumn(i) if !columns.is_empty() => {
                    let id = columns[i % columns.len()].clone();
                    prop_assert!(board.delete_column(&id));
                    deleted.push(id);
                }
                _ => {}
            }

            for id in &deleted {
                prop_assert_eq!(board.tasks().iter().filter(|t| &t.column_id == id).count(), 0);
            }
            for task in board.tasks() {
                prop_assert!(board.find_column(&task.column_id).is_some());
            }
        }
    }

    #[test]
    fn moves_preserve_the_set_of_tasks(moves in prop::collection::vec((0usize..6, 0usize..6, any::<bool>()), 0..40)) {
        let mut board = board();
        let columns: Vec<ColumnId> = (0..3).map(|_| board.add_column().unwrap()).collect();
        let tasks: Vec<TaskId> = (0..6)
            .map(|i| board.add_task(&columns[i % 3]).unwrap())
            .collect();

        for (active, over, onto_column) in moves {
            let target = if onto_column {
                DropTarget::Column(columns[over % 3].clone())
            } else {
                DropTarget::Task(tasks[over].clone())
            };
            board.move_task(&tasks[active], target);
        }

        let mut remaining: Vec<TaskId> = board.tasks().iter().map(|t| t.id.clone()).collect();
        remaining.sort();
        let mut expected = tasks.clone();
        expected.sort();
        prop_assert_eq!(remaining, expected);
    }
}

#[test]
fn adjacent_column_swap_restores_order() {
    let mut board = board();
    let a = board.add_column().unwrap();
    let b = board.add_column().unwrap();
    let c = board.add_column().unwrap();
    let original = column_order(&board);

    assert!(board.move_column(&a, &b));
    assert_eq!(column_order(&board), vec![b.clone(), a.clone(), c.clone()]);
    assert!(board.move_column(&b, &a));
    assert_eq!(column_order(&board), original);
}

#[test]
fn non_adjacent_swap_is_not_an_inverse() {
    let mut board = board();
    let a = board.add_column().unwrap();
    let b = board.add_column().unwrap();
    let c = board.add_column().unwrap();

    board.move_column(&a, &c);
    board.move_column(&c, &a);

    assert_eq!(column_order(&board), vec![b, a, c]);
}

#[rstest]
#[case::rename("Renamed")]
#[case::empty("")]
fn rename_column_is_idempotent(#[case] title: &str) {
    let mut once = board();
    let id = once.add_column().unwrap();
    once.rename_column(&id, title);

    let mut twice = board();
    let id2 = twice.add_column().unwrap();
    twice.rename_column(&id2, title);
    twice.rename_column(&id2, title);

    assert_eq!(once.columns(), twice.columns());
}

#[rstest]
#[case::text("Ship it")]
#[case::unchanged("Task 2")]
fn edit_task_is_idempotent(#[case] content: &str) {
    let mut board = board();
    let column = board.add_column().unwrap();
    let task = board.add_task(&column).unwrap();

    board.edit_task(&task, content);
    let after_once = board.tasks().to_vec();
    board.edit_task(&task, content);

    assert_eq!(board.tasks(), after_once.as_slice());
    assert_eq!(board.find_task(&task).unwrap().content, content);
}

#[test]
fn two_tasks_added_to_same_column() {
    let mut board = board();
    let c1 = board.add_column().unwrap();
    let _c2 = board.add_column().unwrap();

    let t1 = board.add_task(&c1).unwrap();
    let t2 = board.add_task(&c1).unwrap();

    assert_eq!(board.tasks().len(), 2);
    assert!(board.tasks().iter().all(|t| t.column_id == c1));
    assert_ne!(t1, t2);
    assert_ne!(
        board.find_task(&t1).unwrap().content,
        board.find_task(&t2).unwrap().content
    );
}

#[test]
fn column_dragged_onto_neighbour() {
    let mut board = board();
    let c1 = board.add_column().unwrap();
    let c2 = board.add_column().unwrap();

    board.move_column(&c1, &c2);

    assert_eq!(column_order(&board), vec![c2, c1]);
}

#[test]
fn task_moved_onto_task_in_other_column() {
    let mut board = board();
    let c1 = board.add_column().unwrap();
    let c2 = board.add_column().unwrap();
    let _other = board.add_task(&c2).unwrap();
    let t2 = board.add_task(&c2).unwrap();
    let t = board.add_task(&c1).unwrap();
    let t2_index = board.tasks().iter().position(|x| x.id == t2).unwrap();

    assert!(board.move_task(&t, DropTarget::Task(t2)));

    assert_eq!(board.find_task(&t).unwrap().column_id, c2);
    assert_eq!(board.tasks()[t2_index].id, t);
}

#[test]
fn delete_unknown_task_leaves_tasks_unchanged() {
    let mut board = board();
    let c1 = board.add_column().unwrap();
    board.add_task(&c1).unwrap();
    let before = board.tasks().to_vec();

    assert!(!board.delete_task(&TaskId::from_string("does-not-exist")));

    assert_eq!(board.tasks(), before.as_slice());
}
