string_enum! {
    /// Machine sizes offered by the platform
    pub enum InstanceType {
        M3Large => "lsw.m3.large",
        M3XLarge => "lsw.m3.xlarge",
        M32XLarge => "lsw.m3.2xlarge",
        M4Large => "lsw.m4.large",
        M4XLarge => "lsw.m4.xlarge",
        M42XLarge => "lsw.m4.2xlarge",
        M44XLarge => "lsw.m4.4xlarge",
        M5Large => "lsw.m5.large",
        M5XLarge => "lsw.m5.xlarge",
        M52XLarge => "lsw.m5.2xlarge",
        M54XLarge => "lsw.m5.4xlarge",
        M5aLarge => "lsw.m5a.large",
        M5aXLarge => "lsw.m5a.xlarge",
        M5a2XLarge => "lsw.m5a.2xlarge",
        M5a4XLarge => "lsw.m5a.4xlarge",
        M5a8XLarge => "lsw.m5a.8xlarge",
        M5a12XLarge => "lsw.m5a.12xlarge",
        M6aLarge => "lsw.m6a.large",
        M6aXLarge => "lsw.m6a.xlarge",
        M6a2XLarge => "lsw.m6a.2xlarge",
        M6a4XLarge => "lsw.m6a.4xlarge",
        M6a8XLarge => "lsw.m6a.8xlarge",
        M6a12XLarge => "lsw.m6a.12xlarge",
        M6a16XLarge => "lsw.m6a.16xlarge",
        M6a24XLarge => "lsw.m6a.24xlarge",
        C3Large => "lsw.c3.large",
        C3XLarge => "lsw.c3.xlarge",
        C32XLarge => "lsw.c3.2xlarge",
        C34XLarge => "lsw.c3.4xlarge",
        C4Large => "lsw.c4.large",
        C4XLarge => "lsw.c4.xlarge",
        C42XLarge => "lsw.c4.2xlarge",
        C44XLarge => "lsw.c4.4xlarge",
        C5Large => "lsw.c5.large",
        C5XLarge => "lsw.c5.xlarge",
        C52XLarge => "lsw.c5.2xlarge",
        C54XLarge => "lsw.c5.4xlarge",
        C5aLarge => "lsw.c5a.large",
        C5aXLarge => "lsw.c5a.xlarge",
        C5a2XLarge => "lsw.c5a.2xlarge",
        C5a4XLarge => "lsw.c5a.4xlarge",
        C5a9XLarge => "lsw.c5a.9xlarge",
        C5a12XLarge => "lsw.c5a.12xlarge",
        C6aLarge => "lsw.c6a.large",
        C6aXLarge => "lsw.c6a.xlarge",
        C6a2XLarge => "lsw.c6a.2xlarge",
        C6a4XLarge => "lsw.c6a.4xlarge",
        C6a8XLarge => "lsw.c6a.8xlarge",
        C6a12XLarge => "lsw.c6a.12xlarge",
        C6a16XLarge => "lsw.c6a.16xlarge",
        C6a24XLarge => "lsw.c6a.24xlarge",
        R3Large => "lsw.r3.large",
        R3XLarge => "lsw.r3.xlarge",
        R32XLarge => "lsw.r3.2xlarge",
        R4Large => "lsw.r4.large",
        R4XLarge => "lsw.r4.xlarge",
        R42XLarge => "lsw.r4.2xlarge",
        R5Large => "lsw.r5.large",
        R5XLarge => "lsw.r5.xlarge",
        R52XLarge => "lsw.r5.2xlarge",
        R5aLarge => "lsw.r5a.large",
        R5aXLarge => "lsw.r5a.xlarge",
        R5a2XLarge => "lsw.r5a.2xlarge",
        R5a4XLarge => "lsw.r5a.4xlarge",
        R5a8XLarge => "lsw.r5a.8xlarge",
        R5a12XLarge => "lsw.r5a.12xlarge",
        R6aLarge => "lsw.r6a.large",
        R6aXLarge => "lsw.r6a.xlarge",
        R6a2XLarge => "lsw.r6a.2xlarge",
        R6a4XLarge => "lsw.r6a.4xlarge",
        R6a8XLarge => "lsw.r6a.8xlarge",
        R6a12XLarge => "lsw.r6a.12xlarge",
        R6a16XLarge => "lsw.r6a.16xlarge",
    }
}
