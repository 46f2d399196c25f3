mod auto_scaling_group_reference;
mod root_disk_size;
mod ssh_key;
mod uuid;

pub use auto_scaling_group_reference::AutoScalingGroupReference;
pub use root_disk_size::RootDiskSize;
pub use ssh_key::SshKey;
pub use self::uuid::Uuid;
