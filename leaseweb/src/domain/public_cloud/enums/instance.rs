string_enum! {
    /// Instance lifecycle state
    pub enum State {
        Creating => "CREATING",
        Starting => "STARTING",
        Running => "RUNNING",
        Stopping => "STOPPING",
        Stopped => "STOPPED",
        Destroying => "DESTROYING",
        Destroyed => "DESTROYED",
        Failed => "FAILED",
        Unknown => "UNKNOWN",
    }
}

string_enum! {
    pub enum StorageType {
        Central => "CENTRAL",
        Local => "LOCAL",
    }
}

/// Storage backing an instance root disk
pub type RootDiskStorageType = StorageType;

string_enum! {
    pub enum NetworkType {
        Internal => "INTERNAL",
        Public => "PUBLIC",
    }
}
