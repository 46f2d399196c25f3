#[derive(Debug, Clone, PartialEq, Default)]
pub struct Resources {
    pub cpu: Cpu,
    pub memory: Memory,
    pub public_network_speed: NetworkSpeed,
    pub private_network_speed: NetworkSpeed,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Cpu {
    pub value: i64,
    pub unit: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Memory {
    pub value: f64,
    pub unit: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NetworkSpeed {
    pub value: i64,
    pub unit: String,
}
