string_enum! {
    /// Operating system images offered by the platform
    pub enum ImageId {
        AlmaLinux864Bit => "ALMALINUX_8_64BIT",
        AlmaLinux964Bit => "ALMALINUX_9_64BIT",
        ArchLinux64Bit => "ARCH_LINUX_64BIT",
        CentOs764Bit => "CENTOS_7_64BIT",
        Debian1064Bit => "DEBIAN_10_64BIT",
        Debian1164Bit => "DEBIAN_11_64BIT",
        Debian1264Bit => "DEBIAN_12_64BIT",
        FreeBsd1364Bit => "FREEBSD_13_64BIT",
        FreeBsd1464Bit => "FREEBSD_14_64BIT",
        RockyLinux864Bit => "ROCKY_LINUX_8_64BIT",
        RockyLinux964Bit => "ROCKY_LINUX_9_64BIT",
        Ubuntu200464Bit => "UBUNTU_20_04_64BIT",
        Ubuntu220464Bit => "UBUNTU_22_04_64BIT",
        Ubuntu240464Bit => "UBUNTU_24_04_64BIT",
        WindowsServer2019Standard64Bit => "WINDOWS_SERVER_2019_STANDARD_64BIT",
        WindowsServer2022Standard64Bit => "WINDOWS_SERVER_2022_STANDARD_64BIT",
    }
}
