//! Named codes for all 256 octets, ascending by value.

use super::Code;
use crate::hierarchy::Level::{Domain, Leaf, Root, Section};
use crate::tags::Symmetry::{
    BalancedEdge, BalancedRoot, BalancedShadow, UnbalancedEdge, UnbalancedOther, UnbalancedRoot,
    UnbalancedTwin,
};

#[rustfmt::skip]
pub(super) const CODES: [Code; 256] = [
    code(0x00, "ERR_OK", Root, UnbalancedRoot, "Success / No Error"),
    code(0x01, "ERR_SYS_STATE", Domain, UnbalancedEdge, "General System State"),
    code(0x02, "ERR_SYS_ACCESS", Section, UnbalancedEdge, "Permission Denied"),
    code(0x03, "ERR_SYS_HANDLE", Section, UnbalancedOther, "Invalid Handle/Descriptor"),
    code(0x04, "ERR_ACCESS_READ", Leaf, UnbalancedEdge, "Read Access Forbidden"),
    code(0x05, "ERR_ACCESS_WRITE", Leaf, UnbalancedOther, "Write Access Forbidden"),
    code(0x06, "ERR_HANDLE_NULL", Leaf, UnbalancedOther, "Null Pointer/Handle"),
    code(0x07, "ERR_HANDLE_CLOSED", Leaf, UnbalancedOther, "Handle Already Closed"),
    code(0x08, "ERR_SOCK_BIND", Leaf, UnbalancedEdge, "Bind Failed"),
    code(0x09, "ERR_SOCK_LISTEN", Leaf, UnbalancedOther, "Listen Failed"),
    code(0x0A, "ERR_DNS_NXDOMAIN", Leaf, UnbalancedOther, "Domain Not Found"),
    code(0x0B, "ERR_DNS_TIMEOUT", Leaf, UnbalancedOther, "Resolution Timeout"),
    code(0x0C, "ERR_IRQ_MASKED", Leaf, UnbalancedOther, "IRQ Masked"),
    code(0x0D, "ERR_IRQ_INTR", Leaf, UnbalancedOther, "Interrupted"),
    code(0x0E, "ERR_CLK_SKEW", Leaf, UnbalancedOther, "Clock Skew"),
    code(0x0F, "ERR_CLK_JITTER", Leaf, BalancedShadow, "High Jitter"),
    code(0x10, "ERR_TEXT_ENCODING", Leaf, UnbalancedEdge, "Encoding Error"),
    code(0x11, "ERR_TEXT_EMPTY", Leaf, UnbalancedTwin, "Empty String"),
    code(0x12, "ERR_STRUCT_PARSE", Leaf, UnbalancedOther, "Parse/Syntax Error"),
    code(0x13, "ERR_STRUCT_TYPE", Leaf, UnbalancedOther, "Type Mismatch"),
    code(0x14, "ERR_NET_SOCK", Section, UnbalancedOther, "Socket Error"),
    code(0x15, "ERR_NET_DNS", Section, UnbalancedOther, "DNS/Naming"),
    code(0x16, "ERR_TIME_IRQ", Section, UnbalancedOther, "Interrupts"),
    code(0x17, "ERR_TIME_CLOCK", Section, BalancedEdge, "Clocks"),
    code(0x18, "ERR_AUTH_FAIL", Leaf, UnbalancedOther, "Login Failed"),
    code(0x19, "ERR_AUTH_EXPIRED", Leaf, UnbalancedOther, "Token Expired"),
    code(0x1A, "ERR_CRYPT_ALGO", Leaf, UnbalancedOther, "Algo Not Supported"),
    code(0x1B, "ERR_CRYPT_KEY", Leaf, BalancedEdge, "Invalid Key"),
    code(0x1C, "ERR_LOCK_BUSY", Leaf, UnbalancedOther, "Lock Busy"),
    code(0x1D, "ERR_LOCK_OWNER", Leaf, BalancedEdge, "Not Owner"),
    code(0x1E, "ERR_PIPE_BROKEN", Leaf, BalancedShadow, "Broken Pipe"),
    code(0x1F, "ERR_PIPE_FULL", Leaf, UnbalancedOther, "Pipe Full"),
    code(0x20, "ERR_HEAP_OOM", Leaf, UnbalancedEdge, "Out of Memory"),
    code(0x21, "ERR_HEAP_FRAGMENT", Leaf, UnbalancedOther, "Heap Fragmented"),
    code(0x22, "ERR_STACK_OVER", Leaf, UnbalancedTwin, "Stack Overflow"),
    code(0x23, "ERR_STACK_UNDER", Leaf, UnbalancedOther, "Stack Underflow"),
    code(0x24, "ERR_INIT_TIMEOUT", Leaf, UnbalancedOther, "Init Timeout"),
    code(0x25, "ERR_INIT_DEPENDENCY", Leaf, UnbalancedOther, "Dependency Missing"),
    code(0x26, "ERR_STATE_UNK", Leaf, UnbalancedOther, "Unknown State"),
    code(0x27, "ERR_STATE_BALANCED", Leaf, BalancedEdge, "Balanced State Violation"),
    code(0x28, "ERR_FMT_TEXT", Section, UnbalancedOther, "String Encoding"),
    code(0x29, "ERR_FMT_STRUCT", Section, UnbalancedOther, "Structured Data"),
    code(0x2A, "ERR_NET_DOM", Domain, UnbalancedOther, "Networking"),
    code(0x2B, "ERR_TIME_DOM", Domain, BalancedEdge, "Timing & Signals"),
    code(0x2C, "ERR_SRL_BAUD", Leaf, UnbalancedOther, "Baud Rate Mismatch"),
    code(0x2D, "ERR_SRL_FRAME", Leaf, BalancedShadow, "Frame Error"),
    code(0x2E, "ERR_BUS_NACK", Leaf, BalancedEdge, "I2C NACK"),
    code(0x2F, "ERR_BUS_ARB", Leaf, UnbalancedOther, "Arbitration Lost"),
    code(0x30, "ERR_CALC_DIV0", Leaf, UnbalancedOther, "Division by Zero"),
    code(0x31, "ERR_CALC_OVERFLOW", Leaf, UnbalancedOther, "Int Overflow"),
    code(0x32, "ERR_FP_INF", Leaf, UnbalancedOther, "Infinity"),
    code(0x33, "ERR_FP_DENORM", Leaf, BalancedEdge, "Denormalized"),
    code(0x34, "ERR_FS_NOENT", Leaf, UnbalancedOther, "File Not Found"),
    code(0x35, "ERR_FS_EXIST", Leaf, BalancedEdge, "File Exists"),
    code(0x36, "ERR_ATTR_RO", Leaf, BalancedEdge, "Read Only"),
    code(0x37, "ERR_ATTR_HIDDEN", Leaf, UnbalancedOther, "Hidden"),
    code(0x38, "ERR_CPU_ILL", Leaf, UnbalancedOther, "Illegal Instruction"),
    code(0x39, "ERR_CPU_BUS", Leaf, BalancedEdge, "Bus Error"),
    code(0x3A, "ERR_PWR_BOR", Leaf, BalancedEdge, "Brownout"),
    code(0x3B, "ERR_PWR_LOW", Leaf, UnbalancedOther, "Voltage Low"),
    code(0x3C, "ERR_SEC_AUTH", Section, BalancedShadow, "Auth Failure"),
    code(0x3D, "ERR_SEC_CRYPT", Section, UnbalancedOther, "Encryption"),
    code(0x3E, "ERR_ATOM_LOCK", Section, UnbalancedOther, "Lock Error"),
    code(0x3F, "ERR_ATOM_IPC", Section, UnbalancedOther, "Pipe/Queue"),
    code(0x40, "ERR_MEM_ALLOC", Section, UnbalancedEdge, "Allocation Failure"),
    code(0x41, "ERR_MEM_BOUNDS", Section, UnbalancedOther, "Boundary Violation"),
    code(0x42, "ERR_LIFE_INIT", Section, UnbalancedOther, "Initialization"),
    code(0x43, "ERR_LIFE_STATE", Section, UnbalancedOther, "Invalid State Transition"),
    code(0x44, "ERR_PROC_CANCELLED", Leaf, UnbalancedTwin, "Operation Cancelled"),
    code(0x45, "ERR_PROC_ZOMBIE", Leaf, UnbalancedOther, "Process is Zombie"),
    code(0x46, "ERR_SCHED_YIELD", Leaf, UnbalancedOther, "Yield Failed"),
    code(0x47, "ERR_SCHED_PRIORITY", Leaf, BalancedEdge, "Priority Inversion"),
    code(0x48, "ERR_TRANS_RESET", Leaf, UnbalancedOther, "Connection Reset"),
    code(0x49, "ERR_TRANS_CLOSED", Leaf, UnbalancedOther, "Connection Closed"),
    code(0x4A, "ERR_PROTO_BAD", Leaf, UnbalancedOther, "Bad Request"),
    code(0x4B, "ERR_PROTO_PROXY", Leaf, BalancedShadow, "Proxy Error"),
    code(0x4C, "ERR_SYNC_WAIT", Leaf, UnbalancedOther, "Wait Failed"),
    code(0x4D, "ERR_SYNC_BARRIER", Leaf, BalancedEdge, "Barrier Broken"),
    code(0x4E, "ERR_WDT_BARK", Leaf, BalancedEdge, "Watchdog Warning"),
    code(0x4F, "ERR_WDT_BITE", Leaf, UnbalancedOther, "Watchdog Reset"),
    code(0x50, "ERR_MEDIA_HEADER", Leaf, UnbalancedOther, "Invalid Header"),
    code(0x51, "ERR_MEDIA_DEPTH", Leaf, UnbalancedOther, "Unsupported Bit Depth"),
    code(0x52, "ERR_VAL_SCHEMA", Leaf, UnbalancedOther, "Schema Violation"),
    code(0x53, "ERR_VAL_RANGE", Leaf, BalancedEdge, "Value Out of Range"),
    code(0x54, "ERR_FMT_DOM", Domain, UnbalancedOther, "Formats"),
    code(0x55, "ERR_IO_BUSY", Root, BalancedRoot, "Resource Busy / Retry"),
    code(0x56, "ERR_IO_SERIAL", Section, BalancedEdge, "Serial Bus"),
    code(0x57, "ERR_IO_BUS", Section, UnbalancedOther, "Sync Bus"),
    code(0x58, "ERR_POL_DENY", Leaf, UnbalancedOther, "Explicit Deny"),
    code(0x59, "ERR_POL_QUOTA", Leaf, BalancedEdge, "Quota Exceeded"),
    code(0x5A, "ERR_AUDIT_LOG", Leaf, BalancedShadow, "Log Write Failed"),
    code(0x5B, "ERR_AUDIT_FULL", Leaf, UnbalancedOther, "Audit Log Full"),
    code(0x5C, "ERR_ORDER_ACQ", Leaf, BalancedEdge, "Acquire Fail"),
    code(0x5D, "ERR_ORDER_REL", Leaf, UnbalancedOther, "Release Fail"),
    code(0x5E, "ERR_CRIT_ENTER", Leaf, UnbalancedOther, "Enter Fail"),
    code(0x5F, "ERR_CRIT_LEAVE", Leaf, UnbalancedOther, "Leave Fail"),
    code(0x60, "ERR_PAGE_FAULT", Leaf, UnbalancedOther, "Page Fault"),
    code(0x61, "ERR_PAGE_NOT_PRESENT", Leaf, UnbalancedOther, "Page Not Present"),
    code(0x62, "ERR_MAP_FAILED", Leaf, UnbalancedOther, "mmap Failed"),
    code(0x63, "ERR_ALIGN_ADDR", Leaf, BalancedEdge, "Address Misalignment"),
    code(0x64, "ERR_REF_ZERO", Leaf, UnbalancedOther, "Ref Count Zero"),
    code(0x65, "ERR_REF_MAX", Leaf, BalancedEdge, "Ref Count Max"),
    code(0x66, "ERR_GC_ROOT", Leaf, BalancedEdge, "Root Not Found"),
    code(0x67, "ERR_GC_SWEEP", Leaf, UnbalancedOther, "Sweep Failure"),
    code(0x68, "ERR_MATH_CALC", Section, UnbalancedOther, "Arithmetic"),
    code(0x69, "ERR_MATH_FP", Section, BalancedShadow, "Floating Point"),
    code(0x6A, "ERR_STORE_FS", Section, BalancedEdge, "Filesystem Error"),
    code(0x6B, "ERR_STORE_ATTR", Section, UnbalancedOther, "Inodes/Attrs"),
    code(0x6C, "ERR_SIGN_HIGH", Leaf, BalancedEdge, "Saturation High"),
    code(0x6D, "ERR_SIGN_LOW", Leaf, UnbalancedOther, "Saturation Low"),
    code(0x6E, "ERR_GPIO_DIR", Leaf, UnbalancedOther, "Direction Error"),
    code(0x6F, "ERR_GPIO_MUX", Leaf, UnbalancedOther, "Muxing Error"),
    code(0x70, "ERR_CRYPTO_CURVE", Leaf, UnbalancedOther, "Curve Point Invalid"),
    code(0x71, "ERR_CRYPTO_PRIME", Leaf, BalancedEdge, "Not Prime"),
    code(0x72, "ERR_LOGIC_ASSERT", Leaf, BalancedEdge, "Assertion Failed"),
    code(0x73, "ERR_LOGIC_INVARIANT", Leaf, UnbalancedOther, "Invariant Broken"),
    code(0x74, "ERR_BLK_READ", Leaf, BalancedEdge, "Block Read Error"),
    code(0x75, "ERR_BLK_WRITE", Leaf, UnbalancedOther, "Block Write Error"),
    code(0x76, "ERR_VOL_DIRTY", Leaf, UnbalancedOther, "Volume Dirty"),
    code(0x77, "ERR_VOL_MOUNT", Leaf, UnbalancedTwin, "Double Mount"),
    code(0x78, "ERR_RAM_ECC", Leaf, BalancedShadow, "Uncorrectable ECC"),
    code(0x79, "ERR_RAM_PARITY", Leaf, UnbalancedOther, "RAM Parity"),
    code(0x7A, "ERR_PANIC_GENERAL", Leaf, UnbalancedOther, "General Panic"),
    code(0x7B, "ERR_PANIC_STACK", Leaf, UnbalancedOther, "Stack Smashed"),
    code(0x7C, "ERR_HW_CPU", Section, UnbalancedOther, "CPU Exception"),
    code(0x7D, "ERR_HW_PWR", Section, UnbalancedOther, "Power"),
    code(0x7E, "ERR_SEC_DOM", Domain, UnbalancedOther, "Security"),
    code(0x7F, "ERR_LOCK_DOM", Domain, UnbalancedEdge, "Concurrency Fatal"),
    code(0x80, "ERR_MEM_DOM", Domain, UnbalancedEdge, "Memory Subsystem"),
    code(0x81, "ERR_LIFE_DOM", Domain, UnbalancedOther, "Object Lifecycle"),
    code(0x82, "ERR_SYS_PROC", Section, UnbalancedOther, "Process/Thread Error"),
    code(0x83, "ERR_SYS_SCHED", Section, UnbalancedOther, "Scheduler/Priority"),
    code(0x84, "ERR_ACCESS_EXEC", Leaf, UnbalancedOther, "Execute Access Forbidden"),
    code(0x85, "ERR_ACCESS_OWNER", Leaf, UnbalancedOther, "Ownership Mismatch"),
    code(0x86, "ERR_HANDLE_TYPE", Leaf, UnbalancedOther, "Handle Type Mismatch"),
    code(0x87, "ERR_HANDLE_SHADOW", Leaf, BalancedShadow, "Ghost Handle / Stale Ref"),
    code(0x88, "ERR_SOCK_ACCEPT", Leaf, UnbalancedTwin, "Accept Failed"),
    code(0x89, "ERR_SOCK_CONNECT", Leaf, UnbalancedOther, "Connect Failed"),
    code(0x8A, "ERR_DNS_SERVFAIL", Leaf, UnbalancedOther, "Server Failure"),
    code(0x8B, "ERR_DNS_BALANCED", Leaf, BalancedEdge, "Load Balancer Error"),
    code(0x8C, "ERR_IRQ_NESTED", Leaf, UnbalancedOther, "Nested Depth Exceeded"),
    code(0x8D, "ERR_IRQ_BALANCE", Leaf, BalancedEdge, "IRQ Load Balance"),
    code(0x8E, "ERR_CLK_EXPIRED", Leaf, BalancedEdge, "Timer Expired"),
    code(0x8F, "ERR_CLK_DRIFT", Leaf, UnbalancedOther, "Clock Drift"),
    code(0x90, "ERR_TEXT_TRUNC", Leaf, UnbalancedOther, "Truncated"),
    code(0x91, "ERR_TEXT_FORMAT", Leaf, UnbalancedOther, "Text Format Error"),
    code(0x92, "ERR_STRUCT_TAG", Leaf, UnbalancedOther, "Tag Mismatch"),
    code(0x93, "ERR_STRUCT_ATTR", Leaf, BalancedEdge, "Attribute Error"),
    code(0x94, "ERR_NET_TRANS", Section, UnbalancedOther, "Transport Layer"),
    code(0x95, "ERR_NET_PROTO", Section, BalancedEdge, "Application Protocol"),
    code(0x96, "ERR_TIME_SYNC", Section, BalancedShadow, "Sync Primitives"),
    code(0x97, "ERR_TIME_WDT", Section, UnbalancedOther, "Watchdog"),
    code(0x98, "ERR_AUTH_SCOPE", Leaf, UnbalancedOther, "Scope Invalid"),
    code(0x99, "ERR_AUTH_MATCH", Leaf, BalancedEdge, "Credential Replay"),
    code(0x9A, "ERR_CRYPT_IV", Leaf, BalancedEdge, "Invalid IV"),
    code(0x9B, "ERR_CRYPT_TAG", Leaf, UnbalancedOther, "Tag Mismatch"),
    code(0x9C, "ERR_LOCK_DEAD", Leaf, BalancedEdge, "Deadlock Detected"),
    code(0x9D, "ERR_LOCK_MAX", Leaf, UnbalancedOther, "Max Recursion"),
    code(0x9E, "ERR_MSG_SIZE", Leaf, UnbalancedOther, "Message Too Large"),
    code(0x9F, "ERR_MSG_QUEUE", Leaf, UnbalancedOther, "Queue Destroyed"),
    code(0xA0, "ERR_HEAP_CORRUPT", Leaf, UnbalancedOther, "Heap Metadata Corrupt"),
    code(0xA1, "ERR_HEAP_FREE", Leaf, UnbalancedOther, "Double Free"),
    code(0xA2, "ERR_BOUNDS_LOWER", Leaf, UnbalancedOther, "Lower Bound Violation"),
    code(0xA3, "ERR_BOUNDS_UPPER", Leaf, BalancedEdge, "Upper Bound Violation"),
    code(0xA4, "ERR_INIT_PREMATURE", Leaf, UnbalancedOther, "Premature Initialization"),
    code(0xA5, "ERR_NOT_SUPPORTED", Leaf, BalancedShadow, "Not Supported"),
    code(0xA6, "ERR_STATE_LOCKED", Leaf, BalancedEdge, "Object Locked"),
    code(0xA7, "ERR_STATE_FROZEN", Leaf, UnbalancedOther, "Object Frozen"),
    code(0xA8, "ERR_FMT_MEDIA", Section, UnbalancedOther, "Binary Parsing"),
    code(0xA9, "ERR_FMT_VALID", Section, BalancedEdge, "Validation Error"),
    code(0xAA, "ERR_DATA_ROOT", Root, BalancedRoot, "Data Integrity Error"),
    code(0xAB, "ERR_IO_DOM", Domain, UnbalancedOther, "I/O Subsystem"),
    code(0xAC, "ERR_SRL_PARITY", Leaf, BalancedEdge, "Parity Fail"),
    code(0xAD, "ERR_SRL_BREAK", Leaf, UnbalancedOther, "Break Condition"),
    code(0xAE, "ERR_BUS_MODE", Leaf, UnbalancedOther, "SPI Mode Mismatch"),
    code(0xAF, "ERR_BUS_OVER", Leaf, UnbalancedOther, "SPI Overrun"),
    code(0xB0, "ERR_CALC_UNDERFLOW", Leaf, UnbalancedOther, "Int Underflow"),
    code(0xB1, "ERR_CALC_NAN", Leaf, BalancedEdge, "Result is NaN"),
    code(0xB2, "ERR_FP_PRECISION", Leaf, BalancedEdge, "Precision Loss"),
    code(0xB3, "ERR_FP_ROUND", Leaf, UnbalancedOther, "Rounding Error"),
    code(0xB4, "ERR_FS_PERM", Leaf, BalancedShadow, "File Locked"),
    code(0xB5, "ERR_FS_FULL", Leaf, UnbalancedOther, "File Busy"),
    code(0xB6, "ERR_ATTR_SYMLINK", Leaf, UnbalancedOther, "Symlink Loop"),
    code(0xB7, "ERR_ATTR_NO_SPACE", Leaf, UnbalancedOther, "No Device Space"),
    code(0xB8, "ERR_CPU_TRAP", Leaf, BalancedEdge, "Trap"),
    code(0xB9, "ERR_CPU_HALT", Leaf, UnbalancedOther, "Core Halted"),
    code(0xBA, "ERR_PWR_HIGH", Leaf, UnbalancedOther, "Voltage High"),
    code(0xBB, "ERR_PWR_BATT", Leaf, UnbalancedTwin, "Battery Critical"),
    code(0xBC, "ERR_SEC_POLICY", Section, UnbalancedOther, "Policy Violation"),
    code(0xBD, "ERR_SEC_AUDIT", Section, UnbalancedOther, "Audit Failure"),
    code(0xBE, "ERR_ATOM_ORDER", Section, UnbalancedOther, "Atomics"),
    code(0xBF, "ERR_LOCK_CRIT", Section, UnbalancedEdge, "Critical Area"),
    code(0xC0, "ERR_MEM_VIRT", Section, UnbalancedOther, "Virtual Memory"),
    code(0xC1, "ERR_MEM_MAP", Section, UnbalancedOther, "Mapping/Alignment"),
    code(0xC2, "ERR_LIFE_REF", Section, UnbalancedOther, "Reference Counting"),
    code(0xC3, "ERR_LIFE_GC", Section, BalancedShadow, "GC / Cleanup"),
    code(0xC4, "ERR_PROC_ORPHAN", Leaf, UnbalancedOther, "Parent Process Lost"),
    code(0xC5, "ERR_PROC_INVAL", Leaf, BalancedEdge, "Invalid System Argument"),
    code(0xC6, "ERR_SCHED_QUANTUM", Leaf, BalancedEdge, "Time Slice Expired"),
    code(0xC7, "ERR_SCHED_STARVE", Leaf, UnbalancedOther, "Thread Starvation"),
    code(0xC8, "ERR_TRANS_DROP", Leaf, UnbalancedOther, "Packet Dropped"),
    code(0xC9, "ERR_TRANS_CONGEST", Leaf, BalancedEdge, "Congestion"),
    code(0xCA, "ERR_PROTO_SUB", Leaf, BalancedEdge, "Subscription Failed"),
    code(0xCB, "ERR_PROTO_PUB", Leaf, UnbalancedOther, "Publish Failed"),
    code(0xCC, "ERR_SYNC_SEM", Leaf, BalancedEdge, "Semaphore Split"),
    code(0xCD, "ERR_SYNC_MUTEX", Leaf, UnbalancedOther, "Mutex Error"),
    code(0xCE, "ERR_WDT_EARLY", Leaf, UnbalancedOther, "Kick Too Early"),
    code(0xCF, "ERR_WDT_LATE", Leaf, UnbalancedOther, "Kick Too Late"),
    code(0xD0, "ERR_MEDIA_RATE", Leaf, UnbalancedOther, "Unsupported Sample Rate"),
    code(0xD1, "ERR_MEDIA_CKSUM", Leaf, BalancedEdge, "Checksum Fail"),
    code(0xD2, "ERR_VAL_PATTERN", Leaf, BalancedShadow, "Pattern Mismatch"),
    code(0xD3, "ERR_VAL_REQ", Leaf, UnbalancedOther, "Required Field Missing"),
    code(0xD4, "ERR_MATH_DOM", Domain, BalancedEdge, "Computation"),
    code(0xD5, "ERR_STORAGE_DOM", Domain, UnbalancedOther, "File System"),
    code(0xD6, "ERR_IO_SIGNAL", Section, UnbalancedOther, "Analog IO"),
    code(0xD7, "ERR_DRV_GPIO", Section, UnbalancedOther, "GPIO"),
    code(0xD8, "ERR_POL_TIME", Leaf, BalancedEdge, "Access Time Violation"),
    code(0xD9, "ERR_POL_REJECT", Leaf, UnbalancedOther, "Access Rejected"),
    code(0xDA, "ERR_AUDIT_TAMPER", Leaf, UnbalancedOther, "Tampering Detected"),
    code(0xDB, "ERR_AUDIT_FAIL", Leaf, UnbalancedOther, "Audit System Fail"),
    code(0xDC, "ERR_ORDER_BARRIER", Leaf, UnbalancedOther, "Barrier Violation"),
    code(0xDD, "ERR_ORDER_RACE", Leaf, UnbalancedTwin, "Race Condition"),
    code(0xDE, "ERR_CRIT_TIMEOUT", Leaf, UnbalancedOther, "Critical Timeout"),
    code(0xDF, "ERR_CRIT_BAIL", Leaf, UnbalancedEdge, "Emergency Bail"),
    code(0xE0, "ERR_PAGE_PROTECT", Leaf, UnbalancedOther, "Page Protection Violation"),
    code(0xE1, "ERR_PAGE_SHADOW", Leaf, BalancedShadow, "Shadow Page Error"),
    code(0xE2, "ERR_ALIGN_BUS", Leaf, BalancedEdge, "Bus Alignment Error"),
    code(0xE3, "ERR_ALIGN_SIZE", Leaf, UnbalancedOther, "Size Misalignment"),
    code(0xE4, "ERR_REF_LEAK", Leaf, BalancedEdge, "Potential Leak"),
    code(0xE5, "ERR_REF_DANGLING", Leaf, UnbalancedOther, "Dangling Pointer"),
    code(0xE6, "ERR_GC_COMPACT", Leaf, UnbalancedOther, "Compaction Failure"),
    code(0xE7, "ERR_GC_MIRROR", Leaf, UnbalancedOther, "Mirror Object Error"),
    code(0xE8, "ERR_MATH_CRYPTO", Section, BalancedEdge, "Crypto Primitives"),
    code(0xE9, "ERR_MATH_LOGIC", Section, UnbalancedOther, "Logic Gates"),
    code(0xEA, "ERR_STORE_BLOCK", Section, UnbalancedOther, "Block Layer"),
    code(0xEB, "ERR_STORE_VOLUME", Section, UnbalancedOther, "Volume Integrity"),
    code(0xEC, "ERR_SIGN_UNDERRUN", Leaf, UnbalancedOther, "DAC Underrun"),
    code(0xED, "ERR_SIGN_REF", Leaf, UnbalancedOther, "Voltage Ref Error"),
    code(0xEE, "ERR_GPIO_DEBOUNCE", Leaf, UnbalancedTwin, "Debounce Fail"),
    code(0xEF, "ERR_GPIO_LOCKED", Leaf, UnbalancedEdge, "Pin Locked"),
    code(0xF0, "ERR_CRYPTO_SHADOW_KEY", Leaf, BalancedShadow, "Weak Key"),
    code(0xF1, "ERR_CRYPTO_PADDING", Leaf, UnbalancedOther, "Padding Error"),
    code(0xF2, "ERR_LOGIC_REACH", Leaf, UnbalancedOther, "Unreachable Code Reached"),
    code(0xF3, "ERR_LOGIC_STATE", Leaf, UnbalancedOther, "Impossible Logic State"),
    code(0xF4, "ERR_BLK_SECTOR", Leaf, UnbalancedOther, "Bad Sector"),
    code(0xF5, "ERR_BLK_GEOMETRY", Leaf, UnbalancedOther, "Bad Geometry"),
    code(0xF6, "ERR_VOL_UNMOUNT", Leaf, UnbalancedOther, "Unmount Fail"),
    code(0xF7, "ERR_VOL_UNKNOWN", Leaf, UnbalancedEdge, "Unknown FS"),
    code(0xF8, "ERR_RAM_FAIL", Leaf, UnbalancedOther, "RAM Test Failed"),
    code(0xF9, "ERR_RAM_LINE", Leaf, UnbalancedOther, "Address Line Stuck"),
    code(0xFA, "ERR_PANIC_ASSERT", Leaf, UnbalancedOther, "Kernel Assert"),
    code(0xFB, "ERR_PANIC_ABORT", Leaf, UnbalancedEdge, "System Abort"),
    code(0xFC, "ERR_HW_RAM", Section, UnbalancedOther, "RAM/Flash"),
    code(0xFD, "ERR_SYS_PANIC", Section, UnbalancedEdge, "Kernel Panic"),
    code(0xFE, "ERR_HW_DOM", Domain, UnbalancedEdge, "Hardware Panic"),
    code(0xFF, "ERR_FATAL", Root, UnbalancedRoot, "Fatal System Failure"),
];

const fn code(
    value: u8,
    name: &'static str,
    level: crate::hierarchy::Level,
    symmetry: crate::tags::Symmetry,
    describe: &'static str,
) -> Code {
    Code {
        octet: crate::core::octet::Octet::new(value),
        name,
        level,
        symmetry,
        describe,
    }
}
