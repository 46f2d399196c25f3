string_enum! {
    pub enum AutoScalingGroupType {
        Manual => "MANUAL",
        Scheduled => "SCHEDULED",
        CpuBased => "CPU_BASED",
    }
}

string_enum! {
    pub enum AutoScalingGroupState {
        Active => "ACTIVE",
        Creating => "CREATING",
        Created => "CREATED",
        Destroyed => "DESTROYED",
        Destroying => "DESTROYING",
        Scaling => "SCALING",
        Updating => "UPDATING",
    }
}
