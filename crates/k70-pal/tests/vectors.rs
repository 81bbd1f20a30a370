//! Vector table slot lifecycle.

use k70_pal::{Interrupt, PalError, VectorTable, VECTOR_COUNT};

fn noop() {}
fn other() {}

#[test]
fn install_uninstall_reinstall() {
    let mut table = VectorTable::new();
    let vector = Interrupt::Pit0.vector();

    table.install(vector, noop).unwrap();
    assert!(table.is_installed(vector));

    table.uninstall(vector).unwrap();
    assert!(!table.is_installed(vector));

    // The slot is back to unassigned, so a fresh install succeeds.
    table.install(vector, other).unwrap();
    assert!(table.is_installed(vector));
}

#[test]
fn occupied_slot_rejects_second_install() {
    let mut table = VectorTable::new();
    table.install_irq(Interrupt::Uart2RxTx, noop).unwrap();

    let err = table.install_irq(Interrupt::Uart2RxTx, other).unwrap_err();
    assert!(matches!(err, PalError::AlreadyInstalled { vector: 65 }));

    // The original handler survived the failed install.
    assert!(table.handler(65).unwrap().is_some());
}

#[test]
fn uninstall_is_idempotent() {
    let mut table = VectorTable::new();
    table.uninstall(30).unwrap();
    table.uninstall(30).unwrap();
    assert!(!table.is_installed(30));
}

#[test]
fn boundary_vectors() {
    let mut table = VectorTable::new();

    // One past the end fails...
    let err = table.install(VECTOR_COUNT, noop).unwrap_err();
    assert!(matches!(err, PalError::OutOfRange { .. }));
    let err = table.uninstall(VECTOR_COUNT).unwrap_err();
    assert!(matches!(err, PalError::OutOfRange { .. }));

    // ...the last slot works.
    table.install(VECTOR_COUNT - 1, noop).unwrap();
    assert!(table.is_installed(VECTOR_COUNT - 1));
}

#[test]
fn dispatch_runs_the_installed_handler() {
    use std::sync::atomic::{AtomicUsize, Ordering};
    static FIRED: AtomicUsize = AtomicUsize::new(0);

    fn count() {
        FIRED.fetch_add(1, Ordering::SeqCst);
    }

    let mut table = VectorTable::new();
    table.install_irq(Interrupt::RtcSeconds, count).unwrap();

    assert!(table.dispatch(Interrupt::RtcSeconds.vector()).unwrap());
    assert!(!table.dispatch(Interrupt::RtcAlarm.vector()).unwrap());
    assert_eq!(FIRED.load(Ordering::SeqCst), 1);
}

#[test]
fn vector_numbering_matches_hardware() {
    // The numbers the tower firmware programs into the NVIC, plus 16.
    assert_eq!(Interrupt::Uart2RxTx.vector(), 49 + 16);
    assert_eq!(Interrupt::Ftm0.vector(), 62 + 16);
    assert_eq!(Interrupt::RtcSeconds.vector(), 67 + 16);
    assert_eq!(Interrupt::Pit0.vector(), 68 + 16);

    let table = VectorTable::new();
    assert_eq!(table.capacity(), 122);
}
