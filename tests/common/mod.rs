//! Shared in-memory fakes standing in for the host.
#![allow(dead_code)]

use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::{Mutex, RwLock};
use serde_json::Value;
use uuid::Uuid;

use sheetbridge::bridge::{
    Component, ComponentFactory, PropsEnvelope, SheetAccessor, Subscriber,
};
use sheetbridge::config::WorkflowConfig;
use sheetbridge::document::{
    Document, DocumentId, DocumentRegistry, Item, Patch, Snapshot, StoreError, UpdateOptions,
};
use sheetbridge::hotbar::{
    Environment, HotbarSlot, HotbarUser, MacroCollection, MacroDraft, MacroId, MacroRecord,
    Notifier,
};

/// In-memory document with injectable persistence failure.
pub struct MemoryDocument {
    uuid: DocumentId,
    data: RwLock<Value>,
    fail_next_update: AtomicBool,
    render_requests: Mutex<Vec<bool>>,
}

impl MemoryDocument {
    pub fn new(uuid: impl Into<DocumentId>, data: Value) -> Arc<Self> {
        Arc::new(Self {
            uuid: uuid.into(),
            data: RwLock::new(data),
            fail_next_update: AtomicBool::new(false),
            render_requests: Mutex::new(Vec::new()),
        })
    }

    pub fn data(&self) -> Value {
        self.data.read().clone()
    }

    pub fn fail_next_update(&self) {
        self.fail_next_update.store(true, Ordering::SeqCst);
    }

    /// The `render` option of every update received, in order.
    pub fn render_requests(&self) -> Vec<bool> {
        self.render_requests.lock().clone()
    }
}

#[async_trait]
impl Document for MemoryDocument {
    fn uuid(&self) -> DocumentId {
        self.uuid.clone()
    }

    async fn update(&self, patch: Patch, options: UpdateOptions) -> Result<(), StoreError> {
        self.render_requests.lock().push(options.render);
        if self.fail_next_update.swap(false, Ordering::SeqCst) {
            return Err(StoreError::PersistenceFailure {
                uuid: self.uuid.clone(),
                message: "injected failure".to_string(),
            });
        }
        patch.apply_to(&mut self.data.write());
        Ok(())
    }
}

/// Accessor deriving snapshots straight from an in-memory document.
pub struct MemoryAccessor {
    pub document: Arc<MemoryDocument>,
}

impl MemoryAccessor {
    pub fn new(document: Arc<MemoryDocument>) -> Arc<Self> {
        Arc::new(Self { document })
    }
}

impl SheetAccessor for MemoryAccessor {
    fn get_data(&self) -> Snapshot {
        Snapshot::new(self.document.data())
    }

    fn document(&self) -> Arc<dyn Document> {
        self.document.clone()
    }
}

/// Component recording every notification it receives.
pub struct RecordingComponent {
    pub props: PropsEnvelope,
    notifications: Mutex<Vec<Snapshot>>,
}

impl RecordingComponent {
    pub fn notifications(&self) -> Vec<Snapshot> {
        self.notifications.lock().clone()
    }
}

impl Subscriber for RecordingComponent {
    fn notify(&self, snapshot: &Snapshot) {
        self.notifications.lock().push(snapshot.clone());
    }
}

impl Component for RecordingComponent {}

/// Factory retaining every component it constructs.
#[derive(Default)]
pub struct RecordingFactory {
    created: Mutex<Vec<Arc<RecordingComponent>>>,
}

impl RecordingFactory {
    pub fn created(&self) -> Vec<Arc<RecordingComponent>> {
        self.created.lock().clone()
    }
}

impl ComponentFactory for RecordingFactory {
    type Output = RecordingComponent;

    fn create(&self, props: PropsEnvelope) -> Arc<RecordingComponent> {
        let component = Arc::new(RecordingComponent {
            props,
            notifications: Mutex::new(Vec::new()),
        });
        self.created.lock().push(component.clone());
        component
    }
}

/// In-memory item with a roll counter and mutable ownership.
pub struct MemoryItem {
    uuid: DocumentId,
    name: String,
    image: String,
    parent: RwLock<Option<DocumentId>>,
    rolls: AtomicUsize,
}

impl MemoryItem {
    pub fn owned(
        uuid: impl Into<DocumentId>,
        name: impl Into<String>,
        image: impl Into<String>,
        parent: impl Into<DocumentId>,
    ) -> Arc<Self> {
        Arc::new(Self {
            uuid: uuid.into(),
            name: name.into(),
            image: image.into(),
            parent: RwLock::new(Some(parent.into())),
            rolls: AtomicUsize::new(0),
        })
    }

    pub fn roll_count(&self) -> usize {
        self.rolls.load(Ordering::SeqCst)
    }

    /// Detach the item from its owner, as deleting the owning actor
    /// would.
    pub fn disown(&self) {
        *self.parent.write() = None;
    }
}

#[async_trait]
impl Document for MemoryItem {
    fn uuid(&self) -> DocumentId {
        self.uuid.clone()
    }

    async fn update(&self, _patch: Patch, _options: UpdateOptions) -> Result<(), StoreError> {
        Ok(())
    }
}

#[async_trait]
impl Item for MemoryItem {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn image(&self) -> String {
        self.image.clone()
    }

    fn parent(&self) -> Option<DocumentId> {
        self.parent.read().clone()
    }

    async fn roll(&self) {
        self.rolls.fetch_add(1, Ordering::SeqCst);
    }
}

/// In-memory document registry.
#[derive(Default)]
pub struct MemoryRegistry {
    items: RwLock<HashMap<DocumentId, Arc<MemoryItem>>>,
}

impl MemoryRegistry {
    pub fn insert(&self, item: Arc<MemoryItem>) {
        self.items.write().insert(item.uuid.clone(), item);
    }

    pub fn remove(&self, uuid: &DocumentId) {
        self.items.write().remove(uuid);
    }
}

#[async_trait]
impl DocumentRegistry for MemoryRegistry {
    async fn get_item(&self, uuid: &DocumentId) -> Option<Arc<dyn Item>> {
        self.items
            .read()
            .get(uuid)
            .cloned()
            .map(|item| item as Arc<dyn Item>)
    }
}

/// In-memory macro collection minting uuid-based ids, with injectable
/// create failure.
#[derive(Default)]
pub struct MemoryMacros {
    records: RwLock<Vec<MacroRecord>>,
    fail_next_create: AtomicBool,
}

impl MemoryMacros {
    pub fn records(&self) -> Vec<MacroRecord> {
        self.records.read().clone()
    }

    pub fn fail_next_create(&self) {
        self.fail_next_create.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl MacroCollection for MemoryMacros {
    async fn find_item_macro(&self, name: &str, command: &str) -> Option<MacroRecord> {
        self.records
            .read()
            .iter()
            .find(|record| record.name == name && record.command == command)
            .cloned()
    }

    async fn create(&self, draft: MacroDraft) -> Result<MacroRecord, StoreError> {
        if self.fail_next_create.swap(false, Ordering::SeqCst) {
            return Err(StoreError::Backend("injected create failure".to_string()));
        }
        let record = draft.into_record(MacroId::new(Uuid::new_v4().to_string()));
        self.records.write().push(record.clone());
        Ok(record)
    }
}

/// In-memory hotbar for a single user, with injectable assignment
/// failure.
#[derive(Default)]
pub struct MemoryHotbar {
    slots: RwLock<BTreeMap<HotbarSlot, MacroId>>,
    fail_next_assign: AtomicBool,
}

impl MemoryHotbar {
    pub fn slots(&self) -> BTreeMap<HotbarSlot, MacroId> {
        self.slots.read().clone()
    }

    pub fn fail_next_assign(&self) {
        self.fail_next_assign.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl HotbarUser for MemoryHotbar {
    async fn assign_macro(
        &self,
        record: &MacroRecord,
        slot: HotbarSlot,
    ) -> Result<(), StoreError> {
        if self.fail_next_assign.swap(false, Ordering::SeqCst) {
            return Err(StoreError::Backend("injected assign failure".to_string()));
        }
        self.slots.write().insert(slot, record.id.clone());
        Ok(())
    }
}

/// Notifier recording warnings instead of showing them.
#[derive(Default)]
pub struct RecordingNotifier {
    warnings: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn warnings(&self) -> Vec<String> {
        self.warnings.lock().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn warn(&self, message: &str) {
        self.warnings.lock().push(message.to_string());
    }
}

/// A full fake host plus the environment handed to the workflow.
pub struct TestHost {
    pub registry: Arc<MemoryRegistry>,
    pub macros: Arc<MemoryMacros>,
    pub hotbar: Arc<MemoryHotbar>,
    pub notifier: Arc<RecordingNotifier>,
}

impl TestHost {
    pub fn new() -> Self {
        Self {
            registry: Arc::new(MemoryRegistry::default()),
            macros: Arc::new(MemoryMacros::default()),
            hotbar: Arc::new(MemoryHotbar::default()),
            notifier: Arc::new(RecordingNotifier::default()),
        }
    }

    pub fn environment(&self) -> Environment {
        Environment {
            documents: self.registry.clone(),
            macros: self.macros.clone(),
            users: self.hotbar.clone(),
            notify: self.notifier.clone(),
            config: WorkflowConfig::default(),
        }
    }
}
